//! DuckDNS response mapping
//!
//! DuckDNS does not use status codes or structured bodies to signal failure: a
//! rejected update is still HTTP 200 with a body starting with `KO`. Success is
//! HTTP 200 with a body whose first bytes are `OK` (verbose mode appends more lines).

use crate::error::{ProviderError, Result};
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{DuckDnsProvider, PROVIDER_NAME};

const SUCCESS_PREFIX: &[u8] = b"OK";

impl ProviderErrorMapper for DuckDnsProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn check_response(&self, status: u16, body: &str) -> Result<()> {
        check_update_response(status, body)
    }
}

/// Apply the `OK`/`KO` protocol to a raw response.
pub(crate) fn check_update_response(status: u16, body: &str) -> Result<()> {
    if status == 200 && body.as_bytes().starts_with(SUCCESS_PREFIX) {
        return Ok(());
    }

    log::warn!(
        "[{PROVIDER_NAME}] Update rejected (HTTP {status}): {}",
        truncate_for_log(body)
    );
    Err(ProviderError::UpdateRejected {
        provider: PROVIDER_NAME.to_string(),
        status,
        body: truncate_for_log(body),
    })
}
