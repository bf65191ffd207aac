//! Generic HTTP client tools
//!
//! Reusable request execution for providers that speak plain HTTP: sending the request,
//! logging with secrets redacted, and reading the response body.
//!
//! # Design principles
//! - **One attempt per call** - transport failures are reported, never retried here
//! - **Secrets stay out of logs** - URLs are passed through `redact_token` and reqwest
//!   errors are stripped of their URL before they are formatted
//! - **Flexible response parsing** - the caller receives status and raw text and applies
//!   its own success protocol

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::ProviderError;
use crate::utils::log_sanitizer::{redact_token, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Builds a client with the given connect and total request timeouts.
    ///
    /// # Returns
    /// * `Err(ProviderError::ClientInit)` - the TLS backend could not be initialized
    pub fn build_client(
        provider_name: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Client, ProviderError> {
        Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::ClientInit {
                provider: provider_name.to_string(),
                detail: e.without_url().to_string(),
            })
    }

    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL, redacted before logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP status, including non-2xx
    /// * `Err(ProviderError::Unreachable)` - connect/TLS/timeout failure or unreadable body
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {}", redact_token(url));

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            let mut err = transport_error(provider_name, e);
            if let ProviderError::Unreachable { detail, .. } = &mut err {
                *detail = format!("Failed to read response body: {detail}");
            }
            err
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

/// Map a reqwest failure to `Unreachable`, dropping the URL (and with it the token).
///
/// The detail carries the whole cause chain, e.g.
/// `error sending request: client error (Connect): Connection refused`.
fn transport_error(provider_name: &str, error: reqwest::Error) -> ProviderError {
    let timed_out = error.is_timeout();
    let error = error.without_url();

    let mut detail = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }

    ProviderError::Unreachable {
        provider: provider_name.to_string(),
        detail,
        timed_out,
    }
}
