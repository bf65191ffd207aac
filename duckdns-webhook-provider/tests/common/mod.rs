//! Shared test helpers

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use duckdns_webhook_provider::{
    DuckDnsOptions, DuckDnsProvider, ProviderCredentials, Result, TxtLookup,
};
use wiremock::MockServer;

/// TXT lookup that always answers with a fixed value.
pub struct StaticLookup(pub Option<String>);

#[async_trait]
impl TxtLookup for StaticLookup {
    async fn lookup_txt(&self, _fqdn: &str) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Provider pointed at the stub server's `/update` endpoint.
pub fn provider_for(server: &MockServer, token: &str) -> DuckDnsProvider {
    let options = DuckDnsOptions {
        base_url: format!("{}/update", server.uri()),
        ..DuckDnsOptions::default()
    };
    DuckDnsProvider::with_lookup(
        ProviderCredentials::new(token),
        &options,
        Arc::new(StaticLookup(None)),
    )
    .expect("failed to build provider")
}

/// Base URL on a local port nothing listens on.
pub fn closed_port_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/update")
}
