//! DuckDNS Provider

mod error;
mod http;
mod provider;

use std::sync::Arc;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::resolver::HickoryTxtLookup;
use crate::traits::TxtLookup;
use crate::types::{DuckDnsOptions, ProviderCredentials};

pub(crate) const PROVIDER_NAME: &str = "duckdns";

/// DuckDNS TXT record provider
///
/// Owns one HTTP client (bounded by the configured timeouts) and one TXT lookup
/// backend. Build one per challenge operation.
pub struct DuckDnsProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
    pub(crate) lookup: Arc<dyn TxtLookup>,
}

impl DuckDnsProvider {
    /// Create a provider with default options (public endpoint, 30s timeout).
    pub fn new(credentials: ProviderCredentials) -> Result<Self> {
        Self::with_options(credentials, &DuckDnsOptions::default())
    }

    /// Create a provider with explicit options and a hickory TXT lookup.
    pub fn with_options(credentials: ProviderCredentials, options: &DuckDnsOptions) -> Result<Self> {
        let lookup = Arc::new(HickoryTxtLookup::new(
            PROVIDER_NAME,
            &options.nameservers,
            options.lookup_timeout,
        ));
        Self::with_lookup(credentials, options, lookup)
    }

    /// Create a provider with explicit options and a custom TXT lookup backend.
    pub fn with_lookup(
        credentials: ProviderCredentials,
        options: &DuckDnsOptions,
        lookup: Arc<dyn TxtLookup>,
    ) -> Result<Self> {
        let client = HttpUtils::build_client(
            PROVIDER_NAME,
            options.connect_timeout,
            options.request_timeout,
        )?;

        Ok(Self {
            client,
            api_token: credentials.api_token,
            base_url: options.base_url.trim_end_matches('?').to_string(),
            lookup,
        })
    }
}
