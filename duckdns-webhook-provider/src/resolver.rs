//! DNS TXT lookups backed by hickory-resolver.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::{
    TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    proto::rr::rdata::TXT,
};

use crate::error::{ProviderError, Result};
use crate::traits::TxtLookup;

/// TXT lookup through a fresh, non-caching resolver.
///
/// Every lookup is bounded by `timeout`, both inside the resolver and by an outer
/// `tokio::time::timeout`, so a stuck upstream can never block a challenge.
pub struct HickoryTxtLookup {
    provider_name: &'static str,
    resolver: TokioResolver,
    timeout: Duration,
}

impl HickoryTxtLookup {
    /// Build a lookup against `nameservers`, or the system configuration when empty.
    pub fn new(provider_name: &'static str, nameservers: &[IpAddr], timeout: Duration) -> Self {
        let resolver = if nameservers.is_empty() {
            build_system_resolver(timeout)
        } else {
            let config = ResolverConfig::from_parts(
                None,
                vec![],
                NameServerConfigGroup::from_ips_clear(nameservers, 53, true),
            );
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(resolver_opts(timeout))
                .build()
        };

        Self {
            provider_name,
            resolver,
            timeout,
        }
    }

    fn lookup_error(&self, name: &str, detail: impl ToString) -> ProviderError {
        ProviderError::LookupFailed {
            provider: self.provider_name.to_string(),
            name: name.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[async_trait]
impl TxtLookup for HickoryTxtLookup {
    async fn lookup_txt(&self, fqdn: &str) -> Result<Option<String>> {
        log::debug!("[{}] TXT lookup {fqdn}", self.provider_name);

        let lookup = tokio::time::timeout(self.timeout, self.resolver.txt_lookup(fqdn))
            .await
            .map_err(|_| self.lookup_error(fqdn, format!("timed out after {:?}", self.timeout)))?;

        match lookup {
            Ok(records) => {
                let first = first_txt_value(records.iter());
                log::debug!(
                    "[{}] TXT lookup {fqdn}: {} record(s)",
                    self.provider_name,
                    records.iter().count()
                );
                Ok(first)
            }
            Err(e) if e.is_no_records_found() => {
                log::debug!("[{}] TXT lookup {fqdn}: no records", self.provider_name);
                Ok(None)
            }
            Err(e) => Err(self.lookup_error(fqdn, e)),
        }
    }
}

/// Value of the first TXT record, its character-strings joined.
///
/// DuckDNS publishes a single TXT value per host, so later records are ignored.
fn first_txt_value<'a>(records: impl IntoIterator<Item = &'a TXT>) -> Option<String> {
    records.into_iter().next().map(|txt| {
        txt.txt_data()
            .iter()
            .map(|data| String::from_utf8_lossy(data))
            .collect()
    })
}

fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.cache_size = 0;
    opts
}

/// Build a resolver using the host system DNS configuration (with fallback).
fn build_system_resolver(timeout: Duration) -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(mut builder) => {
                *builder.options_mut() = resolver_opts(timeout);
                return builder.build();
            }
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    TokioResolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .with_options(resolver_opts(timeout))
    .build()
}
