//! Fallback listen entry from legacy scalar options.
//!
//! Used when a config has no listen directives but the caller allows a
//! default. The entry is assembled from `proto`, `lport`/`port` and `local`.

use std::net::IpAddr;

use super::error::ListenError;
use super::item::{ListenSpec, SslMode};
use crate::options::{ConfigOption, OptionList};
use crate::transport::{validate_port, Protocol, Suffix, TransportError};

pub const DEFAULT_PORT: &str = "1194";
pub const DEFAULT_ADDRESS_V4: &str = "0.0.0.0";
pub const DEFAULT_ADDRESS_V6: &str = "::0";

const ADDRESS_MAX_LEN: usize = 128;
const TOKEN_MAX_LEN: usize = 16;

/// Synthesize the single default entry for `directive`.
pub fn resolve(options: &OptionList, directive: &str) -> Result<ListenSpec, ListenError> {
    let protocol = match options.get_ptr("proto")? {
        Some(o) => {
            let token = value(o, "proto", TOKEN_MAX_LEN)?;
            let protocol = Protocol::parse(token, Suffix::Server).map_err(|source| {
                ListenError::UnknownProtocol {
                    directive: "proto".into(),
                    source,
                }
            })?;
            if protocol.is_local() {
                return Err(ListenError::LocalProtocolWithoutDirective {
                    directive: "proto".into(),
                    value: token.to_string(),
                });
            }
            protocol
        }
        None => Protocol::UDP_V4,
    };

    let port_option = match options.get_ptr("lport")? {
        Some(o) => Some(("lport", o)),
        None => options.get_ptr("port")?.map(|o| ("port", o)),
    };
    let port = match port_option {
        Some((name, o)) => {
            let port = value(o, name, TOKEN_MAX_LEN)?;
            validate_port(port).map_err(|source| ListenError::InvalidPort {
                directive: name.into(),
                source,
            })?;
            port.to_string()
        }
        None => DEFAULT_PORT.to_string(),
    };

    let (address, protocol) = match options.get_ptr("local")? {
        Some(o) => {
            let address = value(o, "local", ADDRESS_MAX_LEN)?;
            let addr: IpAddr = address.parse().map_err(|_| ListenError::InvalidAddress {
                directive: "local".into(),
                source: TransportError::BadAddress(address.to_string()),
            })?;
            (address.to_string(), protocol.with_family_of(&addr))
        }
        None if protocol.is_ipv6() => (DEFAULT_ADDRESS_V6.to_string(), protocol),
        None => (DEFAULT_ADDRESS_V4.to_string(), protocol),
    };

    Ok(ListenSpec::new(
        directive.to_string(),
        address,
        port,
        protocol,
        SslMode::Unspecified,
        1,
    ))
}

fn value<'a>(option: &'a ConfigOption, name: &str, max_len: usize) -> Result<&'a str, ListenError> {
    option
        .get(1, max_len)
        .map_err(|source| ListenError::MalformedField {
            directive: name.to_string(),
            field: "value",
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::AddressFamily;

    fn resolve_text(text: &str) -> Result<ListenSpec, ListenError> {
        resolve(&OptionList::parse(text), "listen")
    }

    #[test]
    fn test_all_defaults() {
        let spec = resolve_text("").unwrap();
        assert_eq!(spec.directive(), "listen");
        assert_eq!(spec.address(), "0.0.0.0");
        assert_eq!(spec.port(), "1194");
        assert_eq!(spec.protocol(), Protocol::UDP_V4);
        assert_eq!(spec.threads(), 1);
        assert_eq!(spec.ssl(), SslMode::Unspecified);
    }

    #[test]
    fn test_ipv6_proto_picks_v6_any() {
        let spec = resolve_text("proto udp6\n").unwrap();
        assert_eq!(spec.address(), "::0");
        assert_eq!(spec.protocol().to_string(), "UDPv6");
    }

    #[test]
    fn test_server_suffix_allowed() {
        let spec = resolve_text("proto tcp-server\n").unwrap();
        assert_eq!(spec.protocol().to_string(), "TCP");
        assert_eq!(spec.address(), "0.0.0.0");
    }

    #[test]
    fn test_lport_preferred_over_port() {
        let spec = resolve_text("port 1000\nlport 2000\n").unwrap();
        assert_eq!(spec.port(), "2000");

        let spec = resolve_text("port 1000\n").unwrap();
        assert_eq!(spec.port(), "1000");
    }

    #[test]
    fn test_local_reconciles_family() {
        let spec = resolve_text("proto udp4\nlocal 2001:db8::5\n").unwrap();
        assert_eq!(spec.address(), "2001:db8::5");
        assert_eq!(spec.protocol().family(), AddressFamily::V6);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            resolve_text("port 0\n"),
            Err(ListenError::InvalidPort { .. })
        ));
        assert!(matches!(
            resolve_text("local example.net\n"),
            Err(ListenError::InvalidAddress { .. })
        ));
        assert!(matches!(
            resolve_text("proto carrier-pigeon\n"),
            Err(ListenError::UnknownProtocol { .. })
        ));
        assert!(matches!(
            resolve_text("proto unix\n"),
            Err(ListenError::LocalProtocolWithoutDirective { .. })
        ));
        assert!(matches!(
            resolve_text("proto\n"),
            Err(ListenError::MalformedField { field: "value", .. })
        ));
        assert!(matches!(
            resolve_text("port 1000\nport 1001\n"),
            Err(ListenError::Option(_))
        ));
    }
}
