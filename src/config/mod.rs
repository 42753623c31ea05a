//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!
//! server config file
//!     → loader.rs (read)
//!     → OptionList (tokenized lines)
//!     → listen::ListenList::load
//! ```
//!
//! # Design Decisions
//! - All settings have defaults so an absent file is a valid configuration
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, parse_settings, read_options, ConfigError};
pub use schema::{LoaderConfig, ObservabilityConfig, Settings};
pub use validation::{validate_settings, ValidationError};
