//! Secret reader abstract Trait

use async_trait::async_trait;

use crate::error::CredentialError;

/// Secret Reader Trait
///
/// Reads one field of a named secret in a namespace. The solver calls it once per
/// challenge operation and never caches the result.
///
/// Platform implementations:
/// - Binary: `DirectorySecretReader` (`<root>/<namespace>/<name>/<key>` files)
#[async_trait]
pub trait SecretReader: Send + Sync {
    /// Get the raw bytes of one secret field
    ///
    /// # Arguments
    /// * `namespace` - Namespace the challenge's resource lives in
    /// * `name` - Secret name
    /// * `key` - Field inside the secret
    async fn get_secret_field(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, CredentialError>;
}
