//! Port and bounded-number parsing.

use super::TransportError;

const MAX_PORT_DIGITS: usize = 5;

/// Parse an unsigned decimal of at most `max_len` digits within `[min, max]`.
///
/// Only ASCII digits are accepted: no sign, whitespace or radix prefix.
pub fn parse_bounded(s: &str, max_len: usize, min: u32, max: u32) -> Option<u32> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|n| (min..=max).contains(n))
}

/// Parse a textual port number (1..=65535).
pub fn parse_port(port: &str) -> Result<u16, TransportError> {
    parse_bounded(port, MAX_PORT_DIGITS, 1, u16::MAX as u32)
        .map(|n| n as u16)
        .ok_or_else(|| TransportError::BadPort(port.to_string()))
}

/// Check that `port` is a valid port number.
pub fn validate_port(port: &str) -> Result<(), TransportError> {
    parse_port(port).map(|_| ())
}
