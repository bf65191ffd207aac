//! Challenge descriptor types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the issuer asks the solver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeAction {
    /// Publish the TXT record
    Present,
    /// Remove the TXT record
    CleanUp,
}

impl fmt::Display for ChallengeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => f.write_str("present"),
            Self::CleanUp => f.write_str("cleanup"),
        }
    }
}

impl FromStr for ChallengeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("present") {
            Ok(Self::Present)
        } else if s.eq_ignore_ascii_case("cleanup") || s.eq_ignore_ascii_case("clean-up") {
            Ok(Self::CleanUp)
        } else {
            Err(format!("unknown challenge action '{s}'"))
        }
    }
}

/// One DNS-01 challenge, in the issuer's wire format
///
/// Read-only to the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Request identifier, echoed in the response
    #[serde(default)]
    pub uid: String,
    pub action: ChallengeAction,
    /// Name the certificate is issued for
    #[serde(default)]
    pub dns_name: String,
    /// TXT value to publish
    pub key: String,
    /// Zone the challenge name lives in, absolute with trailing `.`
    pub resolved_zone: String,
    /// Challenge name, absolute with trailing `.`
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// Namespace secrets are resolved in
    #[serde(default)]
    pub resource_namespace: String,
    /// Opaque per-issuer solver configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}
