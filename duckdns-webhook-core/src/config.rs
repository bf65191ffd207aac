//! Per-issuer solver configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Secret key used when the configuration does not name one.
pub const DEFAULT_SECRET_KEY: &str = "api-key";

/// Reference to one field of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Secret name
    pub name: String,
    /// Field inside the secret
    pub key: String,
}

/// Validated solver configuration
///
/// Accepts either
/// `{"domain": "myhost", "apiTokenSecretRef": {"name": "creds", "key": "token"}}`
/// or the older `{"zoneName": "myhost", "secretName": "creds"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// DuckDNS host sent as the `domains` query parameter
    pub domain: String,
    /// Where the API token lives
    pub api_token_secret_ref: SecretKeySelector,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSecretRef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default, alias = "zoneName")]
    domain: Option<String>,
    #[serde(default)]
    api_token_secret_ref: Option<RawSecretRef>,
    #[serde(default)]
    secret_name: Option<String>,
}

impl ProviderConfig {
    /// Decode and validate the opaque configuration attached to a challenge.
    pub fn from_json(config: Option<&Value>) -> Result<Self, ConfigError> {
        let value = match config {
            None | Some(Value::Null) => return Err(ConfigError::MissingConfig),
            Some(value) => value,
        };
        let raw = RawConfig::deserialize(value).map_err(|e| ConfigError::Decode(e.to_string()))?;

        let domain = non_empty(raw.domain).ok_or_else(|| missing("domain"))?;

        let (name, key) = match raw.api_token_secret_ref {
            Some(secret_ref) => (secret_ref.name, secret_ref.key),
            None => (raw.secret_name, None),
        };
        let name = non_empty(name).ok_or_else(|| missing("apiTokenSecretRef.name"))?;
        let key = non_empty(key).unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());

        Ok(Self {
            domain,
            api_token_secret_ref: SecretKeySelector { name, key },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn missing(field: &str) -> ConfigError {
    ConfigError::MissingField(field.to_string())
}
