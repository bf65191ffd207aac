//! Public types shared by the provider implementation and its callers.

use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default DuckDNS update endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.duckdns.org/update";
/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default total request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Default upper bound for one TXT lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials for the DuckDNS update API.
///
/// Resolved per challenge operation and dropped with the client. The `Debug`
/// implementation never prints the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// Account token passed as the `token` query parameter.
    pub api_token: String,
}

impl ProviderCredentials {
    /// Wrap a token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_token", &"***")
            .finish()
    }
}

/// Entry label and zone derived from a challenge name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Label in front of the zone, e.g. `_acme-challenge`.
    pub entry: String,
    /// Zone without its trailing separator, e.g. `example.duckdns.org`.
    pub domain: String,
}

/// Tunables for [`DuckDnsProvider`](crate::DuckDnsProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuckDnsOptions {
    /// Update endpoint, without query string.
    pub base_url: String,
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Total timeout for one update request.
    pub request_timeout: Duration,
    /// Upper bound for one TXT lookup.
    pub lookup_timeout: Duration,
    /// Nameservers for TXT lookups; empty means the system configuration.
    pub nameservers: Vec<IpAddr>,
}

impl Default for DuckDnsOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            nameservers: Vec::new(),
        }
    }
}
