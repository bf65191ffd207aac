//! Business logic service layer

mod challenge_solver;
mod record_verifier;

pub use challenge_solver::{ChallengeSolver, SOLVER_NAME};
pub use record_verifier::RecordVerifier;

use std::sync::Arc;

use duckdns_webhook_provider::{ProviderCredentials, TxtRecordProvider};

use crate::config::SecretKeySelector;
use crate::error::{CoreResult, CredentialError};
use crate::traits::{ProviderFactory, SecretReader};

/// Service context - holds all dependencies
///
/// The binary creates this context and injects its secret reader and provider factory.
pub struct ServiceContext {
    /// Secret reader
    pub secret_reader: Arc<dyn SecretReader>,
    /// Provider factory
    pub provider_factory: Arc<dyn ProviderFactory>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        secret_reader: Arc<dyn SecretReader>,
        provider_factory: Arc<dyn ProviderFactory>,
    ) -> Self {
        Self {
            secret_reader,
            provider_factory,
        }
    }

    /// Read the API token referenced by `selector` in `namespace`.
    ///
    /// Surrounding whitespace (a trailing newline in a mounted file) is dropped.
    pub async fn resolve_credentials(
        &self,
        namespace: &str,
        selector: &SecretKeySelector,
    ) -> CoreResult<ProviderCredentials> {
        let raw = self
            .secret_reader
            .get_secret_field(namespace, &selector.name, &selector.key)
            .await?;

        let invalid = |reason: &str| CredentialError::InvalidValue {
            namespace: namespace.to_string(),
            name: selector.name.clone(),
            key: selector.key.clone(),
            reason: reason.to_string(),
        };

        let token = String::from_utf8(raw).map_err(|_| invalid("not valid UTF-8"))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(invalid("value is empty").into());
        }

        Ok(ProviderCredentials::new(token))
    }

    /// Build a provider for one operation.
    pub fn build_provider(
        &self,
        credentials: ProviderCredentials,
    ) -> CoreResult<Arc<dyn TxtRecordProvider>> {
        Ok(self.provider_factory.create(credentials)?)
    }
}
