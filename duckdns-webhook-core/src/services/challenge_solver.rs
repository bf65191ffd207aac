//! DNS-01 challenge solver

use std::future::Future;
use std::sync::Arc;

use duckdns_webhook_provider::{TxtRecordProvider, resolve_entry};
use tokio::time::{Instant, timeout_at};

use crate::config::ProviderConfig;
use crate::error::{ChallengeError, ChallengeResult, CoreError, CoreResult, Stage};
use crate::services::{RecordVerifier, ServiceContext};
use crate::types::{ChallengeAction, ChallengeRequest};

/// Name the issuer configuration refers to this solver by.
pub const SOLVER_NAME: &str = "duckdns";

/// Presents and cleans up DuckDNS TXT records for DNS-01 challenges
///
/// Every operation runs `load config -> resolve entry -> resolve credentials ->
/// build client`, then either creates the record (`Present`) or looks it up,
/// verifies it and deletes it (`CleanUp`). Nothing is retried and nothing is
/// kept between operations.
pub struct ChallengeSolver {
    ctx: Arc<ServiceContext>,
}

impl ChallengeSolver {
    /// Create a solver instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    /// Publish the challenge key as the TXT record.
    pub async fn present(&self, ch: &ChallengeRequest) -> ChallengeResult<()> {
        self.run(ch, ChallengeAction::Present, None).await
    }

    /// Remove the TXT record if it still holds the challenge key.
    pub async fn cleanup(&self, ch: &ChallengeRequest) -> ChallengeResult<()> {
        self.run(ch, ChallengeAction::CleanUp, None).await
    }

    /// [`present`](Self::present) with every stage bounded by `deadline`.
    pub async fn present_until(
        &self,
        ch: &ChallengeRequest,
        deadline: Instant,
    ) -> ChallengeResult<()> {
        self.run(ch, ChallengeAction::Present, Some(deadline)).await
    }

    /// [`cleanup`](Self::cleanup) with every stage bounded by `deadline`.
    pub async fn cleanup_until(
        &self,
        ch: &ChallengeRequest,
        deadline: Instant,
    ) -> ChallengeResult<()> {
        self.run(ch, ChallengeAction::CleanUp, Some(deadline)).await
    }

    /// Run whatever `ch.action` asks for.
    pub async fn solve(&self, ch: &ChallengeRequest) -> ChallengeResult<()> {
        self.run(ch, ch.action, None).await
    }

    /// [`solve`](Self::solve) with every stage bounded by `deadline`.
    pub async fn solve_until(
        &self,
        ch: &ChallengeRequest,
        deadline: Instant,
    ) -> ChallengeResult<()> {
        self.run(ch, ch.action, Some(deadline)).await
    }

    async fn run(
        &self,
        ch: &ChallengeRequest,
        action: ChallengeAction,
        deadline: Option<Instant>,
    ) -> ChallengeResult<()> {
        log::info!(
            "[{SOLVER_NAME}] {action} TXT record for {} (uid {})",
            ch.resolved_fqdn,
            ch.uid
        );

        let result = self.run_stages(ch, action, deadline).await;
        match &result {
            Ok(()) => log::info!("[{SOLVER_NAME}] {action} for {} done", ch.resolved_fqdn),
            Err(e) if e.is_expected() => log::warn!("[{SOLVER_NAME}] {e}"),
            Err(e) => log::error!("[{SOLVER_NAME}] {e}"),
        }
        result
    }

    async fn run_stages(
        &self,
        ch: &ChallengeRequest,
        action: ChallengeAction,
        deadline: Option<Instant>,
    ) -> ChallengeResult<()> {
        let fail = |stage: Stage| {
            move |source: CoreError| ChallengeError::new(action, stage, &ch.resolved_fqdn, source)
        };

        let config = ProviderConfig::from_json(ch.config.as_ref())
            .map_err(|e| fail(Stage::LoadConfig)(e.into()))?;

        let entry = resolve_entry(&ch.resolved_zone, &ch.resolved_fqdn)
            .map_err(|e| fail(Stage::ResolveEntry)(e.into()))?;
        log::debug!(
            "[{SOLVER_NAME}] {} resolves to entry '{}' in '{}', updating host '{}'",
            ch.resolved_fqdn,
            entry.entry,
            entry.domain,
            config.domain
        );

        let credentials = bounded(
            deadline,
            self.ctx
                .resolve_credentials(&ch.resource_namespace, &config.api_token_secret_ref),
        )
        .await
        .map_err(fail(Stage::ResolveCredentials))?;

        let provider = self
            .ctx
            .build_provider(credentials)
            .map_err(fail(Stage::BuildClient))?;

        match action {
            ChallengeAction::Present => {
                bounded(deadline, create(provider.as_ref(), &config.domain, &ch.key))
                    .await
                    .map_err(fail(Stage::CreateRecord))?;
            }
            ChallengeAction::CleanUp => {
                bounded(
                    deadline,
                    RecordVerifier::verify(provider.as_ref(), &ch.resolved_fqdn, &ch.key),
                )
                .await
                .map_err(|e| {
                    let stage = match e {
                        CoreError::Verification(_) => Stage::VerifyRecord,
                        _ => Stage::LookupRecord,
                    };
                    fail(stage)(e)
                })?;

                bounded(deadline, delete(provider.as_ref(), &config.domain, &ch.key))
                    .await
                    .map_err(fail(Stage::DeleteRecord))?;
            }
        }

        Ok(())
    }
}

async fn create(provider: &dyn TxtRecordProvider, entry: &str, value: &str) -> CoreResult<()> {
    Ok(provider.create_record(entry, value).await?)
}

async fn delete(provider: &dyn TxtRecordProvider, entry: &str, value: &str) -> CoreResult<()> {
    Ok(provider.delete_record(entry, value).await?)
}

/// Await `fut`, giving up with [`CoreError::DeadlineExceeded`] once `deadline` passes.
///
/// The abandoned future is dropped, which cancels any request it had in flight.
async fn bounded<T, F>(deadline: Option<Instant>, fut: F) -> CoreResult<T>
where
    F: Future<Output = CoreResult<T>>,
{
    match deadline {
        Some(deadline) => timeout_at(deadline, fut)
            .await
            .unwrap_or(Err(CoreError::DeadlineExceeded)),
        None => fut.await,
    }
}
