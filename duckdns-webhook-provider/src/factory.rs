//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::DuckDnsProvider;
use crate::traits::TxtRecordProvider;
use crate::types::{DuckDnsOptions, ProviderCredentials};

/// Creates a [`TxtRecordProvider`] for one challenge operation.
///
/// The returned provider owns a fresh HTTP client and resolver; nothing is shared
/// with providers created by other calls.
///
/// # Examples
///
/// ```rust,no_run
/// use duckdns_webhook_provider::{create_provider, DuckDnsOptions, ProviderCredentials};
///
/// let provider = create_provider(
///     ProviderCredentials::new("your-token"),
///     &DuckDnsOptions::default(),
/// ).unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    options: &DuckDnsOptions,
) -> Result<Arc<dyn TxtRecordProvider>> {
    Ok(Arc::new(DuckDnsProvider::with_options(credentials, options)?))
}
