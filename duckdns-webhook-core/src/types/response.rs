//! Challenge response type

use serde::{Deserialize, Serialize};

use crate::error::ChallengeError;

/// Outcome reported back to the issuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub uid: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChallengeResponse {
    #[must_use]
    pub fn success(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            success: true,
            message: None,
        }
    }

    #[must_use]
    pub fn failure(uid: impl Into<String>, error: &ChallengeError) -> Self {
        Self {
            uid: uid.into(),
            success: false,
            message: Some(error.to_string()),
        }
    }
}
