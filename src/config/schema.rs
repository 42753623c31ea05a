//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the settings file.

use serde::{Deserialize, Serialize};

use crate::listen::LoadMode;

/// Root settings for the listen loader.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Directive matching and load policy.
    pub loader: LoaderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listen loader configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directive name to load (e.g., "listen"). A trailing `-` matches a family.
    pub directive: String,

    /// Behavior when no directive matches.
    pub load_mode: LoadMode,

    /// Core count for `*N` thread specs. Detected when absent.
    pub cores: Option<u32>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            directive: "listen".to_string(),
            load_mode: LoadMode::AllowDefault,
            cores: None,
        }
    }
}

impl LoaderConfig {
    /// Configured core count, or the detected one.
    pub fn cores(&self) -> u32 {
        self.cores.unwrap_or_else(detect_cores)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Number of cores available to this process, at least 1.
pub fn detect_cores() -> u32 {
    std::thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1)
}
