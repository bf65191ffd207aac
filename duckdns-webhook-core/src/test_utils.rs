//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use duckdns_webhook_provider::{ProviderCredentials, ProviderError, TxtRecordProvider};
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::CredentialError;
use crate::services::{ChallengeSolver, ServiceContext};
use crate::traits::{ProviderFactory, SecretReader};
use crate::types::{ChallengeAction, ChallengeRequest};

// ===== MockSecretReader =====

pub struct MockSecretReader {
    /// (namespace, name) -> key -> value
    secrets: RwLock<HashMap<(String, String), HashMap<String, Vec<u8>>>>,
    reads: RwLock<usize>,
}

impl MockSecretReader {
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
            reads: RwLock::new(0),
        }
    }

    pub async fn insert(&self, namespace: &str, name: &str, key: &str, value: &[u8]) {
        self.secrets
            .write()
            .await
            .entry((namespace.to_string(), name.to_string()))
            .or_default()
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn reads(&self) -> usize {
        *self.reads.read().await
    }
}

#[async_trait]
impl SecretReader for MockSecretReader {
    async fn get_secret_field(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, CredentialError> {
        *self.reads.write().await += 1;

        let secrets = self.secrets.read().await;
        let Some(fields) = secrets.get(&(namespace.to_string(), name.to_string())) else {
            return Err(CredentialError::SecretNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            });
        };
        fields
            .get(key)
            .cloned()
            .ok_or_else(|| CredentialError::KeyNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            })
    }
}

// ===== MockProvider =====

/// One call received by [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Create { entry: String, value: String },
    Delete { entry: String, value: String },
    Lookup { fqdn: String },
}

/// In-memory DuckDNS host: one TXT value, shared by every name
pub struct MockProvider {
    txt: RwLock<Option<String>>,
    calls: RwLock<Vec<MockCall>>,
    /// If Some, create/delete return this error
    update_error: RwLock<Option<ProviderError>>,
    /// If Some, lookup returns this error
    lookup_error: RwLock<Option<ProviderError>>,
    /// If Some, every call sleeps this long first
    delay: RwLock<Option<Duration>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            txt: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
            update_error: RwLock::new(None),
            lookup_error: RwLock::new(None),
            delay: RwLock::new(None),
        }
    }

    pub async fn set_txt(&self, value: Option<&str>) {
        *self.txt.write().await = value.map(str::to_string);
    }

    pub async fn txt(&self) -> Option<String> {
        self.txt.read().await.clone()
    }

    pub async fn set_update_error(&self, err: Option<ProviderError>) {
        *self.update_error.write().await = err;
    }

    pub async fn set_lookup_error(&self, err: Option<ProviderError>) {
        *self.lookup_error.write().await = err;
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.read().await.clone()
    }

    pub async fn create_count(&self) -> usize {
        self.count(|c| matches!(c, MockCall::Create { .. })).await
    }

    pub async fn delete_count(&self) -> usize {
        self.count(|c| matches!(c, MockCall::Delete { .. })).await
    }

    pub async fn lookups(&self) -> Vec<String> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                MockCall::Lookup { fqdn } => Some(fqdn.clone()),
                _ => None,
            })
            .collect()
    }

    async fn count(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.read().await.iter().filter(|c| pred(c)).count()
    }

    async fn before_call(&self, call: MockCall) {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl TxtRecordProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_record(&self, entry: &str, value: &str) -> duckdns_webhook_provider::Result<()> {
        self.before_call(MockCall::Create {
            entry: entry.to_string(),
            value: value.to_string(),
        })
        .await;
        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }
        *self.txt.write().await = Some(value.to_string());
        Ok(())
    }

    async fn delete_record(&self, entry: &str, value: &str) -> duckdns_webhook_provider::Result<()> {
        self.before_call(MockCall::Delete {
            entry: entry.to_string(),
            value: value.to_string(),
        })
        .await;
        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }
        *self.txt.write().await = None;
        Ok(())
    }

    async fn lookup_record(&self, fqdn: &str) -> duckdns_webhook_provider::Result<Option<String>> {
        self.before_call(MockCall::Lookup {
            fqdn: fqdn.to_string(),
        })
        .await;
        if let Some(err) = self.lookup_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.txt.read().await.clone())
    }
}

// ===== MockProviderFactory =====

/// Hands out the same [`MockProvider`] and remembers the tokens it was given
pub struct MockProviderFactory {
    provider: Arc<MockProvider>,
    tokens: Mutex<Vec<String>>,
    error: Mutex<Option<ProviderError>>,
}

impl MockProviderFactory {
    pub fn new(provider: Arc<MockProvider>) -> Self {
        Self {
            provider,
            tokens: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, err: ProviderError) {
        if let Ok(mut slot) = self.error.lock() {
            *slot = Some(err);
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(
        &self,
        credentials: ProviderCredentials,
    ) -> Result<Arc<dyn TxtRecordProvider>, ProviderError> {
        if let Some(err) = self.error.lock().ok().and_then(|e| e.clone()) {
            return Err(err);
        }
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(credentials.api_token);
        }
        let provider: Arc<dyn TxtRecordProvider> = self.provider.clone();
        Ok(provider)
    }
}

// ===== Helper functions =====

pub fn create_test_solver(
    secrets: Arc<MockSecretReader>,
    factory: Arc<MockProviderFactory>,
) -> ChallengeSolver {
    ChallengeSolver::new(Arc::new(ServiceContext::new(secrets, factory)))
}

/// Challenge for `myhost.duckdns.org` with key `xyz789`, token in `cert-manager/creds[token]`
pub fn sample_challenge(action: ChallengeAction) -> ChallengeRequest {
    ChallengeRequest {
        uid: "6f1c0d7e".to_string(),
        action,
        dns_name: "myhost.duckdns.org".to_string(),
        key: "xyz789".to_string(),
        resolved_zone: "myhost.duckdns.org.".to_string(),
        resolved_fqdn: "_acme-challenge.myhost.duckdns.org.".to_string(),
        resource_namespace: "cert-manager".to_string(),
        config: Some(json!({
            "domain": "myhost",
            "apiTokenSecretRef": {"name": "creds", "key": "token"}
        })),
    }
}
