//! Transport primitives shared by the listen loader.
//!
//! # Responsibilities
//! - Parse protocol tokens (`udp`, `tcp6`, `unix`, ...) into a `Protocol`
//! - Reconcile a protocol's address family with a parsed IP literal
//! - Validate textual port numbers
//!
//! # Design Decisions
//! - `Protocol` is a small `Copy` value; reconciliation returns a new value
//! - Errors here carry only the offending text; callers add directive context

pub mod port;
pub mod protocol;

pub use port::{parse_bounded, parse_port, validate_port};
pub use protocol::{AddressFamily, Protocol, Suffix, Transport};

/// Error type for transport-level parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Token does not name a known protocol.
    #[error("unknown protocol '{0}'")]
    UnknownProtocol(String),

    /// Port is not a decimal number in 1..=65535.
    #[error("bad port number: {0}")]
    BadPort(String),

    /// Address is not an IPv4 or IPv6 literal.
    #[error("error parsing IP address '{0}'")]
    BadAddress(String),
}
