//! One-shot challenge handling

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use duckdns_webhook_core::{
    ChallengeAction, ChallengeRequest, ChallengeResponse, ChallengeSolver, DuckDnsProviderFactory,
    SecretReader, ServiceContext,
};
use serde_json::Value;
use tokio::time::Instant;

use crate::adapters::DirectorySecretReader;
use crate::config::WebhookConfig;

/// Decode a challenge, letting `action` override the one in the payload.
pub fn parse_request(
    input: &str,
    action: Option<ChallengeAction>,
) -> anyhow::Result<ChallengeRequest> {
    let mut value: Value = serde_json::from_str(input).context("challenge is not valid JSON")?;
    if let (Some(action), Some(object)) = (action, value.as_object_mut()) {
        object.insert("action".to_string(), serde_json::to_value(action)?);
    }
    serde_json::from_value(value).context("challenge does not have the expected shape")
}

/// Solver backed by mounted secrets and the configured DuckDNS endpoint.
pub fn build_solver(config: &WebhookConfig) -> ChallengeSolver {
    let secret_reader: Arc<dyn SecretReader> =
        Arc::new(DirectorySecretReader::new(&config.secrets_dir));
    let provider_factory = Arc::new(DuckDnsProviderFactory::new(config.provider.clone()));
    ChallengeSolver::new(Arc::new(ServiceContext::new(
        secret_reader,
        provider_factory,
    )))
}

/// Run the challenge and turn the outcome into a response for the issuer.
pub async fn handle(
    solver: &ChallengeSolver,
    request: &ChallengeRequest,
    deadline: Option<Duration>,
) -> ChallengeResponse {
    let result = match deadline {
        Some(limit) => solver.solve_until(request, Instant::now() + limit).await,
        None => solver.solve(request).await,
    };
    match result {
        Ok(()) => ChallengeResponse::success(&request.uid),
        Err(e) => ChallengeResponse::failure(&request.uid, &e),
    }
}
