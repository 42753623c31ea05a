//! The listen specification record.

use std::fmt;

use serde::Serialize;

use super::error::ListenError;
use crate::transport::{parse_port, Protocol, TransportError};

/// SSL qualifier of a listen entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SslMode {
    #[default]
    Unspecified,
    On,
    Off,
}

/// One validated endpoint to bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenSpec {
    directive: String,
    address: String,
    port: String,
    protocol: Protocol,
    ssl: SslMode,
    threads: u32,
}

impl ListenSpec {
    pub(crate) fn new(
        directive: String,
        address: String,
        port: String,
        protocol: Protocol,
        ssl: SslMode,
        threads: u32,
    ) -> Self {
        Self {
            directive,
            address,
            port,
            protocol,
            ssl,
            threads,
        }
    }

    /// The directive keyword as written in the config.
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Host/IP literal, or socket path for local endpoints.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Decimal port; empty for local endpoints.
    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn ssl(&self) -> SslMode {
        self.ssl
    }

    /// Worker threads for this endpoint.
    pub fn threads(&self) -> u32 {
        self.threads
    }

    pub fn is_local(&self) -> bool {
        self.protocol.is_local()
    }

    /// Derive a copy of this entry with the port shifted by `offset`.
    ///
    /// Used to hand successive ports to per-thread listeners. Fails when the
    /// entry has no numeric port (local sockets).
    pub fn port_offset(&self, offset: u32) -> Result<ListenSpec, ListenError> {
        let invalid = |source: TransportError| ListenError::InvalidPort {
            directive: self.directive.clone(),
            source,
        };

        let base = parse_port(&self.port).map_err(invalid)?;
        let shifted = u32::from(base)
            .checked_add(offset)
            .ok_or_else(|| invalid(TransportError::BadPort(format!("{}+{}", base, offset))))?;

        Ok(ListenSpec {
            port: shifted.to_string(),
            ..self.clone()
        })
    }
}

impl fmt::Display for ListenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.directive, self.address)?;
        if !self.is_local() {
            write!(f, " {}", self.port)?;
        }
        write!(f, " {} {}", self.protocol, self.threads)?;
        match self.ssl {
            SslMode::On => f.write_str(" ssl"),
            SslMode::Off => f.write_str(" !ssl"),
            SslMode::Unspecified => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Suffix;

    fn spec(port: &str, proto: &str, ssl: SslMode) -> ListenSpec {
        ListenSpec::new(
            "listen".into(),
            "10.0.0.1".into(),
            port.into(),
            Protocol::parse(proto, Suffix::None).unwrap(),
            ssl,
            2,
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(spec("1194", "udp4", SslMode::On).to_string(), "listen 10.0.0.1 1194 UDPv4 2 ssl");
        assert_eq!(spec("443", "tcp4", SslMode::Off).to_string(), "listen 10.0.0.1 443 TCPv4 2 !ssl");
        assert_eq!(
            spec("", "unix", SslMode::Unspecified).to_string(),
            "listen 10.0.0.1 UnixStream 2"
        );
    }

    #[test]
    fn test_port_offset_leaves_original() {
        let original = spec("1194", "udp4", SslMode::Off);
        let shifted = original.port_offset(3).unwrap();

        assert_eq!(shifted.port(), "1197");
        assert_eq!(original.port(), "1194");
        assert_eq!(shifted.address(), original.address());
        assert_eq!(shifted.protocol(), original.protocol());
        assert_eq!(shifted.ssl(), original.ssl());
        assert_eq!(shifted.threads(), original.threads());
    }

    #[test]
    fn test_port_offset_requires_numeric_port() {
        let local = spec("", "unix", SslMode::Unspecified);
        assert!(matches!(
            local.port_offset(1),
            Err(ListenError::InvalidPort { .. })
        ));
    }
}
