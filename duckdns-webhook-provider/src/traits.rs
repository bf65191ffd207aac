use async_trait::async_trait;

use crate::error::{ProviderError, Result};

/// Provider error mapping trait (internal use)
///
/// Providers implement this to turn their raw responses into the unified error type.
pub(crate) trait ProviderErrorMapper {
    /// Returns the provider identifier
    fn provider_name(&self) -> &'static str;

    /// Applies the provider's success protocol to a raw HTTP response
    fn check_response(&self, status: u16, body: &str) -> Result<()>;

    /// Shortcut: invalid request parameter
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// TXT record provider trait
///
/// One instance serves one challenge operation; implementations hold the credentials
/// they were built with and are not meant to be cached across operations.
#[async_trait]
pub trait TxtRecordProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Publish `value` as the TXT record of `entry`.
    ///
    /// Idempotent: publishing the same value again overwrites it.
    async fn create_record(&self, entry: &str, value: &str) -> Result<()>;

    /// Clear the TXT record of `entry`.
    ///
    /// Idempotent: clearing an already cleared record succeeds.
    async fn delete_record(&self, entry: &str, value: &str) -> Result<()>;

    /// Look up the TXT record currently published at `fqdn`.
    ///
    /// Returns the first value found, or `None` when no TXT record exists.
    async fn lookup_record(&self, fqdn: &str) -> Result<Option<String>>;
}

/// DNS TXT lookup backend
#[async_trait]
pub trait TxtLookup: Send + Sync {
    /// Returns the first TXT value at `fqdn`, `None` when there is none.
    async fn lookup_txt(&self, fqdn: &str) -> Result<Option<String>>;
}
