//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

pub(crate) mod duckdns;

pub use duckdns::DuckDnsProvider;
