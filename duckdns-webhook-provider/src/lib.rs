//! # duckdns-webhook-provider
//!
//! DuckDNS client for ACME DNS-01 challenges: publishes and clears the TXT record
//! of a DuckDNS host through its HTTP update API and reads it back over DNS.
//!
//! ## Wire protocol
//!
//! | Operation | Request |
//! |-----------|---------|
//! | create | `GET /update?domains=<entry>&token=<token>&txt=<value>` |
//! | delete | `GET /update?domains=<entry>&token=<token>&txt=<value>&clear=true` |
//!
//! A call succeeds only on HTTP 200 with a body starting with `OK`. DuckDNS reports
//! failures as HTTP 200 with a `KO` body, so the status code alone means nothing.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duckdns_webhook_provider::{
//!     create_provider, resolve_entry, DuckDnsOptions, ProviderCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entry = resolve_entry(
//!         "myhost.duckdns.org.",
//!         "_acme-challenge.myhost.duckdns.org.",
//!     )?;
//!     println!("entry={} domain={}", entry.entry, entry.domain);
//!
//!     let provider = create_provider(
//!         ProviderCredentials::new("your-token"),
//!         &DuckDnsOptions::default(),
//!     )?;
//!     provider.create_record("myhost", "challenge-key").await?;
//!
//!     let published = provider
//!         .lookup_record("_acme-challenge.myhost.duckdns.org.")
//!         .await?;
//!     println!("published: {published:?}");
//!
//!     provider.delete_record("myhost", "challenge-key").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Unreachable`] - transport failure or timeout (30s by default)
//! - [`ProviderError::UpdateRejected`] - non-200 status or a body not starting with `OK`
//! - [`ProviderError::LookupFailed`] - the TXT lookup failed (not "no record")
//! - [`ProviderError::InvalidParameter`] - malformed names
//!
//! Nothing is retried internally.

mod error;
mod factory;
mod http_client;
mod providers;
mod resolver;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export public traits (the error mapper stays internal)
pub use traits::{TxtLookup, TxtRecordProvider};

// Re-export types
pub use types::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
    DuckDnsOptions, ProviderCredentials, RecordEntry,
};

// Re-export name helpers and the concrete provider
pub use providers::DuckDnsProvider;
pub use providers::common::{normalize_domain_name, resolve_entry};
pub use resolver::HickoryTxtLookup;

// Re-export utils module
pub use utils::log_sanitizer;
