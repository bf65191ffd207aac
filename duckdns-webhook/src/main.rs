//! DuckDNS ACME DNS-01 solver entry point
//!
//! Handles one challenge per invocation:
//!
//! ```text
//! duckdns-webhook [present|cleanup] < challenge.json
//! ```
//!
//! The challenge is read from stdin in the issuer's JSON format, the response
//! (`{"uid", "success", "message"}`) is written to stdout, and logs go to stderr.
//! The exit code is non-zero when the challenge failed.

mod adapters;
mod config;
mod handler;

use std::process::ExitCode;

use anyhow::Context;
use config::WebhookConfig;
use duckdns_webhook_core::ChallengeAction;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the response, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let config = WebhookConfig::from_env()?;

    let action = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<ChallengeAction>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("failed to read challenge from stdin")?;
    let request = handler::parse_request(&input, action)?;

    let solver = handler::build_solver(&config);
    tracing::info!(
        "Solver '{}' for group {} handling {} {}",
        solver.name(),
        config.group_name,
        request.action,
        request.resolved_fqdn
    );

    let response = handler::handle(&solver, &request, config.deadline).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(response.success)
}
