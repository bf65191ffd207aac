//! Provider factory abstract Trait

use std::sync::Arc;

use duckdns_webhook_provider::{
    DuckDnsOptions, DuckDnsProvider, ProviderCredentials, ProviderError, TxtLookup,
    TxtRecordProvider, create_provider,
};

/// Provider Factory Trait
///
/// Builds a fresh [`TxtRecordProvider`] for each challenge operation from the
/// credentials resolved for it.
pub trait ProviderFactory: Send + Sync {
    fn create(
        &self,
        credentials: ProviderCredentials,
    ) -> Result<Arc<dyn TxtRecordProvider>, ProviderError>;
}

/// Builds [`DuckDnsProvider`]s with fixed options
#[derive(Clone, Default)]
pub struct DuckDnsProviderFactory {
    options: DuckDnsOptions,
    lookup: Option<Arc<dyn TxtLookup>>,
}

impl DuckDnsProviderFactory {
    /// Providers use the hickory resolver for TXT lookups.
    #[must_use]
    pub fn new(options: DuckDnsOptions) -> Self {
        Self {
            options,
            lookup: None,
        }
    }

    /// Providers share the given TXT lookup backend.
    #[must_use]
    pub fn with_lookup(options: DuckDnsOptions, lookup: Arc<dyn TxtLookup>) -> Self {
        Self {
            options,
            lookup: Some(lookup),
        }
    }

    #[must_use]
    pub fn options(&self) -> &DuckDnsOptions {
        &self.options
    }
}

impl ProviderFactory for DuckDnsProviderFactory {
    fn create(
        &self,
        credentials: ProviderCredentials,
    ) -> Result<Arc<dyn TxtRecordProvider>, ProviderError> {
        match &self.lookup {
            Some(lookup) => Ok(Arc::new(DuckDnsProvider::with_lookup(
                credentials,
                &self.options,
                Arc::clone(lookup),
            )?)),
            None => create_provider(credentials, &self.options),
        }
    }
}
