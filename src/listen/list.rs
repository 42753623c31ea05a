//! The ordered collection of listen entries.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::builder;
use super::defaults;
use super::error::ListenError;
use super::item::ListenSpec;
use super::matcher::DirectiveMatcher;
use crate::options::OptionList;

/// What to do when no directive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// At least one directive is required.
    #[default]
    Nominal,
    /// Fall back to an entry built from legacy options.
    AllowDefault,
    /// Yield an empty list.
    AllowEmpty,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Nominal => "nominal",
            LoadMode::AllowDefault => "allow_default",
            LoadMode::AllowEmpty => "allow_empty",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "nominal" => Ok(LoadMode::Nominal),
            "allow_default" => Ok(LoadMode::AllowDefault),
            "allow_empty" => Ok(LoadMode::AllowEmpty),
            other => Err(format!("unknown load mode '{}'", other)),
        }
    }
}

/// Listen entries in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListenList {
    entries: Vec<ListenSpec>,
}

impl ListenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the list for `directive` from `options`.
    ///
    /// Any error aborts the whole load.
    pub fn load(
        options: &OptionList,
        directive: &str,
        mode: LoadMode,
        cores: u32,
    ) -> Result<Self, ListenError> {
        let matcher = DirectiveMatcher::new(directive);
        let matched = options.iter().filter(|o| matcher.matches(o)).count();

        if matched > 0 {
            let mut entries = Vec::with_capacity(matched);
            for option in options.iter().filter(|o| matcher.matches(o)) {
                entries.push(builder::build(option, cores)?);
            }
            let list = Self { entries };
            tracing::info!(
                directive,
                entries = list.len(),
                total_threads = list.total_threads(),
                "Listen directives loaded"
            );
            return Ok(list);
        }

        match mode {
            LoadMode::AllowDefault => {
                let spec = defaults::resolve(options, directive)?;
                tracing::warn!(
                    directive,
                    listen = %spec,
                    "No listen directives found, using default"
                );
                Ok(Self::from(spec))
            }
            LoadMode::AllowEmpty => {
                tracing::debug!(directive, "No listen directives found");
                Ok(Self::new())
            }
            LoadMode::Nominal => Err(ListenError::NoDirectivesFound {
                directive: directive.to_string(),
            }),
        }
    }

    /// Sum of worker threads across all entries, saturating at `u32::MAX`.
    pub fn total_threads(&self) -> u32 {
        self.entries
            .iter()
            .map(ListenSpec::threads)
            .fold(0, u32::saturating_add)
    }
}

impl From<ListenSpec> for ListenList {
    fn from(spec: ListenSpec) -> Self {
        Self {
            entries: vec![spec],
        }
    }
}

impl Deref for ListenList {
    type Target = [ListenSpec];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ListenList {
    type Item = &'a ListenSpec;
    type IntoIter = std::slice::Iter<'a, ListenSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str, mode: LoadMode) -> Result<ListenList, ListenError> {
        ListenList::load(&OptionList::parse(text), "listen", mode, 4)
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let list = load(
            "listen 0.0.0.0 1194 udp\nproto tcp\nlisten ::1 443 tcp 2\nlisten 0.0.0.0 1194 udp\n",
            LoadMode::Nominal,
        )
        .unwrap();
        let ports: Vec<_> = list.iter().map(ListenSpec::port).collect();
        assert_eq!(ports, ["1194", "443", "1194"]);
        assert_eq!(list.total_threads(), 4);
    }

    #[test]
    fn test_explicit_directive_suppresses_default() {
        let list = load("port 5000\nlisten 10.0.0.1 1194 udp\n", LoadMode::AllowDefault).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].port(), "1194");
    }

    #[test]
    fn test_modes_without_directives() {
        let err = load("proto udp\n", LoadMode::Nominal).unwrap_err();
        assert_eq!(err.to_string(), "no listen directives found");

        let list = load("proto udp\n", LoadMode::AllowEmpty).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.total_threads(), 0);

        let list = load("proto udp\n", LoadMode::AllowDefault).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_first_error_aborts() {
        let err = load(
            "listen 0.0.0.0 1194 udp\nlisten 0.0.0.0 1194 udp 0\n",
            LoadMode::Nominal,
        )
        .unwrap_err();
        assert!(matches!(err, ListenError::InvalidThreadCount { .. }));
    }

    #[test]
    fn test_total_threads_saturates() {
        let options = OptionList::parse("listen 0.0.0.0 1194 udp 2*N\nlisten 0.0.0.0 1195 udp 2*N\n");
        let list = ListenList::load(&options, "listen", LoadMode::Nominal, u32::MAX).unwrap();
        assert_eq!(list[0].threads(), u32::MAX);
        assert_eq!(list.total_threads(), u32::MAX);
    }

    #[test]
    fn test_load_mode_from_str() {
        assert_eq!("allow-default".parse::<LoadMode>(), Ok(LoadMode::AllowDefault));
        assert_eq!("allow_empty".parse::<LoadMode>(), Ok(LoadMode::AllowEmpty));
        assert_eq!(LoadMode::Nominal.to_string(), "nominal");
        assert!("strict".parse::<LoadMode>().is_err());
    }
}
