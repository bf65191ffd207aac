//! DuckDNS webhook core library
//!
//! Fulfills ACME DNS-01 challenges against DuckDNS:
//! - Parses the per-issuer solver configuration
//! - Resolves the API token from a secret through [`SecretReader`]
//! - Publishes the TXT record on `Present`
//! - Verifies and clears the TXT record on `CleanUp`
//!
//! Secret storage and provider construction are abstracted through traits so the
//! caller decides where tokens live and how clients are built.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ProviderConfig, SecretKeySelector};
pub use error::{ChallengeError, ChallengeResult, CoreError, CoreResult, Stage};
pub use services::{ChallengeSolver, RecordVerifier, SOLVER_NAME, ServiceContext};
pub use traits::{DuckDnsProviderFactory, ProviderFactory, SecretReader};
pub use types::{ChallengeAction, ChallengeRequest, ChallengeResponse};
