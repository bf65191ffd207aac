use serde::{Deserialize, Serialize};

/// Unified error type for all DuckDNS provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// No variant ever carries the API token: request URLs are redacted before they reach
/// an error or a log line.
///
/// # Transient Errors
///
/// [`Unreachable`](Self::Unreachable) and [`LookupFailed`](Self::LookupFailed) describe
/// transport problems. Nothing in this crate retries them; the caller decides whether to
/// re-run the whole challenge operation later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The update endpoint could not be reached (connection refused, DNS failure,
    /// TLS failure, timeout, or the response body could not be read).
    Unreachable {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
        /// Whether the request hit the configured timeout.
        timed_out: bool,
    },

    /// The provider answered, but did not accept the update.
    ///
    /// Raised for any status other than 200 and for any body that does not start
    /// with the ASCII bytes `OK` (DuckDNS answers `KO` on failure).
    UpdateRejected {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body, truncated for diagnostics.
        body: String,
    },

    /// The DNS TXT lookup failed for a reason other than "no such record".
    LookupFailed {
        /// Provider that produced the error.
        provider: String,
        /// Name that was queried.
        name: String,
        /// Error details.
        detail: String,
    },

    /// A request parameter is invalid (e.g. a challenge name outside its zone).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The HTTP client or resolver could not be constructed.
    ClientInit {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (bad input, rejected token, etc.), used for log levels.
    ///
    /// Returns `true` when `warn` should be used, `false` for `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::UpdateRejected { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Whether re-running the same operation later might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::LookupFailed { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable {
                provider,
                detail,
                timed_out,
            } => {
                if *timed_out {
                    write!(f, "[{provider}] Request timed out: {detail}")
                } else {
                    write!(f, "[{provider}] Provider unreachable: {detail}")
                }
            }
            Self::UpdateRejected {
                provider,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "[{provider}] Update rejected (HTTP {status})")
                } else {
                    write!(f, "[{provider}] Update rejected (HTTP {status}): {body}")
                }
            }
            Self::LookupFailed {
                provider,
                name,
                detail,
            } => {
                write!(f, "[{provider}] TXT lookup for '{name}' failed: {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ClientInit { provider, detail } => {
                write!(f, "[{provider}] Failed to initialize client: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
