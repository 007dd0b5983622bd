//! Caller address envelope.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::Version;

/// Response of a whoami lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoamiResponse {
    /// Publication date of the dataset that answered.
    #[serde(default)]
    pub version: Version,
    /// The address the request came from.
    #[serde(rename = "remote_addr")]
    pub remote_address: RemoteAddress,
}

/// The public address the service saw the request come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAddress {
    /// IP version, `v4` or `v6`.
    #[serde(rename = "type")]
    pub family: AddressFamily,
    /// The IP address.
    pub address: IpAddr,
}

/// IP version reported alongside the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// IPv4.
    V4,
    /// IPv6.
    V6,
}

impl RemoteAddress {
    /// Whether the reported family agrees with the parsed address.
    pub fn is_consistent(&self) -> bool {
        matches!(
            (self.family, self.address),
            (AddressFamily::V4, IpAddr::V4(_)) | (AddressFamily::V6, IpAddr::V6(_))
        )
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.address.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whoami_v4() {
        let json = r#"{"remote_addr":{"type":"v4","address":"192.168.0.1"}}"#;
        let response: WhoamiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.remote_address.to_string(), "192.168.0.1");
        assert_eq!(response.remote_address.family, AddressFamily::V4);
        assert!(response.remote_address.is_consistent());
    }

    #[test]
    fn test_whoami_v6() {
        let json = r#"{"remote_addr":{"type":"v6","address":"2001:db8::1"}}"#;
        let response: WhoamiResponse = serde_json::from_str(json).unwrap();
        assert!(response.remote_address.address.is_ipv6());
        assert!(response.remote_address.is_consistent());
    }

    #[test]
    fn test_whoami_rejects_garbage_address() {
        let json = r#"{"remote_addr":{"type":"v4","address":"not-an-ip"}}"#;
        assert!(serde_json::from_str::<WhoamiResponse>(json).is_err());
    }
}
