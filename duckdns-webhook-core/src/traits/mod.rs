//! Abstractions the solver depends on

mod provider_factory;
mod secret_reader;

pub use provider_factory::{DuckDnsProviderFactory, ProviderFactory};
pub use secret_reader::SecretReader;
