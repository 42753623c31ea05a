//! Listen loader errors.

use crate::options::OptionError;
use crate::transport::TransportError;

/// Error type for loading listen specifications.
///
/// Every variant names the directive (or legacy option) it came from so
/// the message can be shown to the operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListenError {
    /// A required field is missing or exceeds its length limit.
    #[error("{directive}: malformed {field} field: {source}")]
    MalformedField {
        directive: String,
        field: &'static str,
        #[source]
        source: OptionError,
    },

    #[error("{directive}: {source}")]
    InvalidPort {
        directive: String,
        #[source]
        source: TransportError,
    },

    #[error("{directive} protocol: {source}")]
    UnknownProtocol {
        directive: String,
        #[source]
        source: TransportError,
    },

    #[error("{directive} addr: {source}")]
    InvalidAddress {
        directive: String,
        #[source]
        source: TransportError,
    },

    #[error("{directive}: bad num threads: {value}")]
    InvalidThreadCount { directive: String, value: String },

    #[error("{directive}: local socket only supports one thread per pathname (not {value})")]
    UnsupportedMultiThreadLocal { directive: String, value: String },

    #[error("{directive}: SSL not supported on local sockets")]
    UnsupportedSslOnLocal { directive: String },

    #[error("{directive}: unrecognized SSL qualifier: {value}")]
    UnrecognizedQualifier { directive: String, value: String },

    /// A legacy `proto` option named a local transport, which has no port.
    #[error("{directive}: local socket protocol '{value}' requires an explicit listen directive")]
    LocalProtocolWithoutDirective { directive: String, value: String },

    /// A local socket protocol follows a numeric port.
    #[error("{directive}: local socket protocol '{value}' cannot be used with a port")]
    LocalProtocolWithPort { directive: String, value: String },

    #[error("no {directive} directives found")]
    NoDirectivesFound { directive: String },

    #[error(transparent)]
    Option(#[from] OptionError),
}
