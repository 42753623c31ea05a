//! Builds one `ListenSpec` from a matched directive line.
//!
//! # Field Layout
//! ```text
//! 0          1         2               3           4            5
//! <directive> <address> <port>          <protocol>  [threads]    [ssl|!ssl]
//! <directive> <path>    <local-marker>  [threads]   [ssl|!ssl]
//! ```
//! A local-socket marker in the port slot doubles as the protocol token, so
//! every field after it moves one position left.
//!
//! # Design Decisions
//! - The optional thread count is recognized by a leading ASCII digit. A
//!   future qualifier starting with a digit would be read as a thread count.
//! - The record is assembled once from fully parsed fields

use std::net::IpAddr;

use super::error::ListenError;
use super::item::{ListenSpec, SslMode};
use crate::options::{ConfigOption, OptionError};
use crate::transport::{parse_bounded, validate_port, Protocol, Suffix, TransportError};

/// Whether local sockets can be served by several threads per pathname.
pub const MULTI_THREAD_LOCAL: bool = cfg!(windows);

/// Upper bound for the thread count before the `*N` multiplier.
pub const MAX_THREADS: u32 = 100;

const THREADS_MAX_DIGITS: usize = 3;
const CORES_SUFFIX: &str = "*N";

const DIRECTIVE_MAX_LEN: usize = 64;
const ADDRESS_MAX_LEN: usize = 128;
const TOKEN_MAX_LEN: usize = 16;

const DIRECTIVE_INDEX: usize = 0;
const ADDRESS_INDEX: usize = 1;
const PORT_INDEX: usize = 2;

/// Index shift for fields following the port slot.
fn offset(is_local: bool) -> usize {
    usize::from(is_local)
}

/// Positions of the fields whose index depends on the endpoint kind.
struct FieldLayout {
    protocol: usize,
    threads: usize,
}

impl FieldLayout {
    fn new(is_local: bool) -> Self {
        let shift = offset(is_local);
        Self {
            protocol: 3 - shift,
            threads: 4 - shift,
        }
    }

    fn ssl(&self, has_threads: bool) -> usize {
        self.threads + usize::from(has_threads)
    }
}

/// Convert a matched option into a validated listen entry.
///
/// `cores` expands the `*N` thread-count suffix.
pub fn build(option: &ConfigOption, cores: u32) -> Result<ListenSpec, ListenError> {
    option.touch();

    let directive = required(
        option,
        option.name().unwrap_or_default(),
        "directive",
        DIRECTIVE_INDEX,
        DIRECTIVE_MAX_LEN,
    )?
    .to_string();

    let address = required(option, &directive, "address", ADDRESS_INDEX, ADDRESS_MAX_LEN)?;

    let port = required(option, &directive, "port", PORT_INDEX, TOKEN_MAX_LEN)?;
    let is_local = Protocol::is_local_type(port);
    if !is_local {
        validate_port(port).map_err(|source| ListenError::InvalidPort {
            directive: directive.clone(),
            source,
        })?;
    }
    let layout = FieldLayout::new(is_local);

    let token = required(option, &directive, "protocol", layout.protocol, TOKEN_MAX_LEN)?;
    let mut protocol =
        Protocol::parse(token, Suffix::None).map_err(|source| ListenError::UnknownProtocol {
            directive: directive.clone(),
            source,
        })?;
    if !is_local && protocol.is_local() {
        return Err(ListenError::LocalProtocolWithPort {
            directive,
            value: token.to_string(),
        });
    }
    if !is_local {
        let addr: IpAddr = address.parse().map_err(|_| ListenError::InvalidAddress {
            directive: directive.clone(),
            source: TransportError::BadAddress(address.to_string()),
        })?;
        protocol = protocol.with_family_of(&addr);
    }

    let threads_token = optional(option, &directive, "threads", layout.threads)?;
    let has_threads = threads_token
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_digit());
    let threads = if has_threads {
        parse_threads(&directive, threads_token, cores)?
    } else {
        1
    };
    if is_local && !MULTI_THREAD_LOCAL && threads != 1 {
        return Err(ListenError::UnsupportedMultiThreadLocal {
            directive,
            value: threads_token.to_string(),
        });
    }

    let ssl_index = layout.ssl(has_threads);
    let ssl = if option.len() > ssl_index {
        match required(option, &directive, "ssl qualifier", ssl_index, TOKEN_MAX_LEN)? {
            "ssl" if is_local => return Err(ListenError::UnsupportedSslOnLocal { directive }),
            "ssl" => SslMode::On,
            "!ssl" => SslMode::Off,
            other => {
                return Err(ListenError::UnrecognizedQualifier {
                    directive,
                    value: other.to_string(),
                })
            }
        }
    } else {
        SslMode::Unspecified
    };

    let port = if is_local { String::new() } else { port.to_string() };
    let address = address.to_string();

    tracing::debug!(
        directive = %directive,
        address = %address,
        port = %port,
        protocol = %protocol,
        threads,
        ssl = ?ssl,
        "Listen directive parsed"
    );

    Ok(ListenSpec::new(directive, address, port, protocol, ssl, threads))
}

fn required<'a>(
    option: &'a ConfigOption,
    directive: &str,
    field: &'static str,
    index: usize,
    max_len: usize,
) -> Result<&'a str, ListenError> {
    option.get(index, max_len).map_err(|source| malformed(directive, field, source))
}

fn optional<'a>(
    option: &'a ConfigOption,
    directive: &str,
    field: &'static str,
    index: usize,
) -> Result<&'a str, ListenError> {
    option
        .get_optional(index, TOKEN_MAX_LEN)
        .map_err(|source| malformed(directive, field, source))
}

fn malformed(directive: &str, field: &'static str, source: OptionError) -> ListenError {
    ListenError::MalformedField {
        directive: directive.to_string(),
        field,
        source,
    }
}

/// Parse `<digits>` or `<digits>*N`.
fn parse_threads(directive: &str, token: &str, cores: u32) -> Result<u32, ListenError> {
    let (base, multiplier) = match token.strip_suffix(CORES_SUFFIX) {
        Some(base) => (base, cores.max(1)),
        None => (token, 1),
    };
    let n = parse_bounded(base, THREADS_MAX_DIGITS, 1, MAX_THREADS).ok_or_else(|| {
        ListenError::InvalidThreadCount {
            directive: directive.to_string(),
            value: base.to_string(),
        }
    })?;
    Ok(n.saturating_mul(multiplier))
}
