//! Type definition module

mod challenge;
mod response;

pub use challenge::{ChallengeAction, ChallengeRequest};
pub use response::ChallengeResponse;

// Re-export provider library public types
pub use duckdns_webhook_provider::{DuckDnsOptions, ProviderCredentials, RecordEntry};
