//! Listen directive loading.
//!
//! # Data Flow
//! ```text
//! OptionList
//!     → matcher.rs (select directive lines)
//!     → builder.rs (one ListenSpec per matched line)
//!     → ListenList (ordered, immutable)
//!
//! No matches:
//!     → LoadMode::Nominal      → NoDirectivesFound
//!     → LoadMode::AllowDefault → defaults.rs (proto/lport/port/local)
//!     → LoadMode::AllowEmpty   → empty list
//! ```
//!
//! # Design Decisions
//! - Loading is synchronous and all-or-nothing
//! - Entries are immutable; `port_offset` derives new entries

pub mod builder;
pub mod defaults;
pub mod error;
pub mod item;
pub mod list;
pub mod matcher;

pub use error::ListenError;
pub use item::{ListenSpec, SslMode};
pub use list::{ListenList, LoadMode};
pub use matcher::{matches, DirectiveMatcher};
