//! Transport protocol values.

use std::fmt;
use std::net::IpAddr;

use serde::{Serialize, Serializer};

use super::TransportError;

/// Transport kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Udp,
    Tcp,
    Tls,
    UnixStream,
    UnixDgram,
    NamedPipe,
}

impl Transport {
    /// True for transports addressed by path rather than host and port.
    pub fn is_local(self) -> bool {
        matches!(self, Transport::UnixStream | Transport::UnixDgram | Transport::NamedPipe)
    }
}

/// IP address family of a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

/// Role suffix accepted after a protocol token, e.g. `tcp-server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    None,
    Server,
    Client,
}

impl Suffix {
    fn strip(self, token: &str) -> &str {
        let suffix = match self {
            Suffix::None => return token,
            Suffix::Server => "-server",
            Suffix::Client => "-client",
        };
        token.strip_suffix(suffix).unwrap_or(token)
    }
}

/// A transport kind paired with an address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protocol {
    transport: Transport,
    family: AddressFamily,
}

impl Protocol {
    pub const UDP_V4: Protocol = Protocol::new(Transport::Udp, AddressFamily::V4);

    pub const fn new(transport: Transport, family: AddressFamily) -> Self {
        Self { transport, family }
    }

    /// Parse a protocol token. Tokens are case-insensitive, and the display
    /// names (`UDPv4`, `TLS/TCPv6`, ...) parse back to the same value.
    pub fn parse(token: &str, suffix: Suffix) -> Result<Self, TransportError> {
        let lower = token.to_ascii_lowercase();
        Self::from_bare(suffix.strip(&lower))
            .ok_or_else(|| TransportError::UnknownProtocol(token.to_string()))
    }

    /// True if `token` names a local (non-IP) transport.
    pub fn is_local_type(token: &str) -> bool {
        Self::from_bare(&token.to_ascii_lowercase()).is_some_and(|p| p.is_local())
    }

    fn from_bare(token: &str) -> Option<Self> {
        use AddressFamily::*;
        use Transport::*;

        let (transport, family) = match token {
            "udp" => (Udp, Unspecified),
            "udp4" | "udpv4" => (Udp, V4),
            "udp6" | "udpv6" => (Udp, V6),
            "tcp" => (Tcp, Unspecified),
            "tcp4" | "tcpv4" => (Tcp, V4),
            "tcp6" | "tcpv6" => (Tcp, V6),
            "tls" | "tls/tcp" => (Tls, Unspecified),
            "tls4" | "tls/tcpv4" => (Tls, V4),
            "tls6" | "tls/tcpv6" => (Tls, V6),
            "unix" | "unix-stream" | "unixstream" => (UnixStream, Unspecified),
            "unix-dgram" | "unixdgram" => (UnixDgram, Unspecified),
            "named-pipe" | "namedpipe" => (NamedPipe, Unspecified),
            _ => return None,
        };
        Some(Self::new(transport, family))
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn is_local(&self) -> bool {
        self.transport.is_local()
    }

    pub fn is_ipv6(&self) -> bool {
        self.family == AddressFamily::V6
    }

    /// Return this protocol with its family taken from `addr`.
    ///
    /// Local transports have no address family and are returned unchanged.
    pub fn with_family_of(self, addr: &IpAddr) -> Self {
        if self.is_local() {
            return self;
        }
        Self::new(self.transport, AddressFamily::of(addr))
    }

    /// Canonical display name, e.g. `UDPv4` or `TLS/TCPv6`.
    pub fn as_str(&self) -> &'static str {
        use AddressFamily::*;
        use Transport::*;

        match (self.transport, self.family) {
            (Udp, Unspecified) => "UDP",
            (Udp, V4) => "UDPv4",
            (Udp, V6) => "UDPv6",
            (Tcp, Unspecified) => "TCP",
            (Tcp, V4) => "TCPv4",
            (Tcp, V6) => "TCPv6",
            (Tls, Unspecified) => "TLS/TCP",
            (Tls, V4) => "TLS/TCPv4",
            (Tls, V6) => "TLS/TCPv6",
            (UnixStream, _) => "UnixStream",
            (UnixDgram, _) => "UnixDGram",
            (NamedPipe, _) => "NamedPipe",
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::UDP_V4
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let p = Protocol::parse("udp6", Suffix::None).unwrap();
        assert_eq!(p.transport(), Transport::Udp);
        assert!(p.is_ipv6());

        let p = Protocol::parse("TCP", Suffix::None).unwrap();
        assert_eq!(p.to_string(), "TCP");

        let p = Protocol::parse("unix", Suffix::None).unwrap();
        assert!(p.is_local());
        assert_eq!(p.to_string(), "UnixStream");
    }

    #[test]
    fn test_display_names_parse_back() {
        for token in [
            "udp", "udp4", "udp6", "tcp", "tcp4", "tcp6", "tls", "tls4", "tls6", "unix",
            "unix-dgram", "named-pipe",
        ] {
            let p = Protocol::parse(token, Suffix::None).unwrap();
            assert_eq!(Protocol::parse(p.as_str(), Suffix::None), Ok(p), "{}", token);
        }
        assert!(Protocol::is_local_type("UnixStream"));
    }

    #[test]
    fn test_parse_suffix() {
        let p = Protocol::parse("tcp6-server", Suffix::Server).unwrap();
        assert_eq!(p.to_string(), "TCPv6");

        let err = Protocol::parse("tcp-server", Suffix::None).unwrap_err();
        assert_eq!(err, TransportError::UnknownProtocol("tcp-server".into()));

        assert!(Protocol::parse("tcp-client", Suffix::Server).is_err());
    }

    #[test]
    fn test_is_local_type() {
        assert!(Protocol::is_local_type("unix"));
        assert!(Protocol::is_local_type("unix-dgram"));
        assert!(Protocol::is_local_type("named-pipe"));
        assert!(!Protocol::is_local_type("1194"));
        assert!(!Protocol::is_local_type("udp"));
        assert!(!Protocol::is_local_type(""));
    }

    #[test]
    fn test_with_family_of() {
        let v6: IpAddr = "2001:db8::1".parse().unwrap();
        let v4: IpAddr = "10.0.0.1".parse().unwrap();

        let p = Protocol::parse("udp4", Suffix::None).unwrap().with_family_of(&v6);
        assert_eq!(p.to_string(), "UDPv6");

        let p = Protocol::parse("tls", Suffix::None).unwrap().with_family_of(&v4);
        assert_eq!(p.to_string(), "TLS/TCPv4");

        let local = Protocol::parse("unix", Suffix::None).unwrap();
        assert_eq!(local.with_family_of(&v4), local);
    }
}
