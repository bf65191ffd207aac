//! Unified error type definition

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use duckdns_webhook_provider::ProviderError;

use crate::types::ChallengeAction;

/// Solver configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ConfigError {
    /// The challenge carried no solver configuration
    #[error("Missing solver configuration")]
    MissingConfig,

    /// The configuration is not the expected JSON shape
    #[error("Error decoding solver config: {0}")]
    Decode(String),

    /// A required field is absent or empty
    #[error("Solver config field '{0}' must not be empty")]
    MissingField(String),
}

/// Secret lookup errors
///
/// Carries the secret's coordinates, never its value.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all_fields = "camelCase")]
pub enum CredentialError {
    #[error("Secret {namespace}/{name} not found")]
    SecretNotFound { namespace: String, name: String },

    #[error("Key '{key}' not found in secret {namespace}/{name}")]
    KeyNotFound {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Key '{key}' in secret {namespace}/{name} is not a usable token: {reason}")]
    InvalidValue {
        namespace: String,
        name: String,
        key: String,
        reason: String,
    },

    #[error("Failed to read secret {namespace}/{name}: {detail}")]
    Backend {
        namespace: String,
        name: String,
        detail: String,
    },
}

/// TXT record verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all_fields = "camelCase")]
pub enum VerificationError {
    /// The published value differs from the one this challenge owns
    #[error("TXT record value mismatch: expected '{expected}', found {}", describe_found(.found))]
    ValueMismatch {
        expected: String,
        found: Option<String>,
    },
}

#[allow(clippy::ref_option)]
fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(value) => format!("'{value}'"),
        None => "no record".to_string(),
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Solver configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Secret lookup error
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// CleanUp safety check failed
    #[error("Verification failed: {0}")]
    Verification(#[from] VerificationError),

    /// The caller's deadline passed before the stage finished
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (bad config, missing secret, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Config(_) | Self::Verification(_) => true,
            Self::Credential(e) => !matches!(e, CredentialError::Backend { .. }),
            Self::Provider(e) => e.is_expected(),
            Self::DeadlineExceeded => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Step of a challenge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    LoadConfig,
    ResolveEntry,
    ResolveCredentials,
    BuildClient,
    LookupRecord,
    VerifyRecord,
    CreateRecord,
    DeleteRecord,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LoadConfig => "load config",
            Self::ResolveEntry => "resolve entry",
            Self::ResolveCredentials => "resolve credentials",
            Self::BuildClient => "build client",
            Self::LookupRecord => "lookup record",
            Self::VerifyRecord => "verify record",
            Self::CreateRecord => "create record",
            Self::DeleteRecord => "delete record",
        };
        f.write_str(s)
    }
}

/// A failed challenge operation and the stage it stopped at
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{operation} for {fqdn} failed at {stage}: {source}")]
pub struct ChallengeError {
    pub operation: ChallengeAction,
    pub stage: Stage,
    pub fqdn: String,
    pub source: CoreError,
}

impl ChallengeError {
    #[must_use]
    pub fn new(operation: ChallengeAction, stage: Stage, fqdn: &str, source: CoreError) -> Self {
        Self {
            operation,
            stage,
            fqdn: fqdn.to_string(),
            source,
        }
    }

    /// See [`CoreError::is_expected`].
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.source.is_expected()
    }
}

/// Result of a whole challenge operation
pub type ChallengeResult<T> = std::result::Result<T, ChallengeError>;
