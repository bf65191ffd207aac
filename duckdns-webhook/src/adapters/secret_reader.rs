//! File-backed secret reader
//!
//! Secrets are laid out as `<root>/<namespace>/<name>/<key>`, the shape a
//! projected secret volume produces.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use duckdns_webhook_core::SecretReader;
use duckdns_webhook_core::error::CredentialError;

/// Reads secret fields from a directory tree.
pub struct DirectorySecretReader {
    root: PathBuf,
}

impl DirectorySecretReader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// A single, non-traversing path segment.
fn is_plain_component(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}

#[async_trait]
impl SecretReader for DirectorySecretReader {
    async fn get_secret_field(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, CredentialError> {
        let secret_not_found = || CredentialError::SecretNotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        };

        if !is_plain_component(namespace) || !is_plain_component(name) {
            return Err(secret_not_found());
        }
        let secret_dir = self.root.join(namespace).join(name);

        if !is_plain_component(key) {
            return Err(CredentialError::KeyNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            });
        }

        match tokio::fs::read(secret_dir.join(key)).await {
            Ok(bytes) => {
                log::debug!("Read secret {namespace}/{name} key '{key}'");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let dir_exists = tokio::fs::metadata(&secret_dir)
                    .await
                    .is_ok_and(|m| m.is_dir());
                if dir_exists {
                    Err(CredentialError::KeyNotFound {
                        namespace: namespace.to_string(),
                        name: name.to_string(),
                        key: key.to_string(),
                    })
                } else {
                    Err(secret_not_found())
                }
            }
            Err(e) => Err(CredentialError::Backend {
                namespace: namespace.to_string(),
                name: name.to_string(),
                detail: e.to_string(),
            }),
        }
    }
}
