//! Listen directive loader for a tunneling server.
//!
//! Turns tokenized `listen` lines (and legacy `proto`/`port`/`local`
//! options) into validated, ordered listen specifications.

pub mod config;
pub mod listen;
pub mod observability;
pub mod options;
pub mod transport;

pub use config::Settings;
pub use listen::{ListenError, ListenList, ListenSpec, LoadMode, SslMode};
pub use options::{ConfigOption, OptionList};
pub use transport::Protocol;
