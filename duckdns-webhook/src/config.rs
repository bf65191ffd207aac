//! Process configuration from environment variables

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use duckdns_webhook_provider::{DEFAULT_BASE_URL, DEFAULT_LOOKUP_TIMEOUT, DuckDnsOptions};

const DEFAULT_SECRETS_DIR: &str = "/var/run/secrets/duckdns-webhook";

/// Settings for one webhook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// API group the solver is registered under (`GROUP_NAME`)
    pub group_name: String,
    /// Root of the mounted secrets (`DUCKDNS_SECRETS_DIR`)
    pub secrets_dir: PathBuf,
    /// Provider tunables (`DUCKDNS_API_URL`, `DUCKDNS_DNS_SERVERS`, `DUCKDNS_LOOKUP_TIMEOUT_SECS`)
    pub provider: DuckDnsOptions,
    /// Upper bound for the whole challenge (`DUCKDNS_DEADLINE_SECS`)
    pub deadline: Option<Duration>,
}

impl WebhookConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let Some(group_name) = var("GROUP_NAME") else {
            bail!("GROUP_NAME must be specified");
        };

        let secrets_dir = var("DUCKDNS_SECRETS_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_SECRETS_DIR), PathBuf::from);

        let nameservers = match var("DUCKDNS_DNS_SERVERS") {
            Some(list) => parse_nameservers(&list)?,
            None => Vec::new(),
        };

        let lookup_timeout = match var("DUCKDNS_LOOKUP_TIMEOUT_SECS") {
            Some(raw) => parse_secs("DUCKDNS_LOOKUP_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_LOOKUP_TIMEOUT,
        };

        let deadline = var("DUCKDNS_DEADLINE_SECS")
            .map(|raw| parse_secs("DUCKDNS_DEADLINE_SECS", &raw))
            .transpose()?;

        Ok(Self {
            group_name,
            secrets_dir,
            provider: DuckDnsOptions {
                base_url: var("DUCKDNS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                lookup_timeout,
                nameservers,
                ..DuckDnsOptions::default()
            },
            deadline,
        })
    }
}

fn parse_nameservers(list: &str) -> anyhow::Result<Vec<IpAddr>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<IpAddr>()
                .with_context(|| format!("invalid address '{s}' in DUCKDNS_DNS_SERVERS"))
        })
        .collect()
}

fn parse_secs(name: &str, raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("{name} must be a whole number of seconds, got '{raw}'"))?;
    if secs == 0 {
        bail!("{name} must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<WebhookConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        WebhookConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn group_name_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err.to_string(), "GROUP_NAME must be specified");

        assert!(config_from(&[("GROUP_NAME", "  ")]).is_err());
    }

    #[test]
    fn defaults() {
        let config = config_from(&[("GROUP_NAME", "acme.example.com")]).unwrap();
        assert_eq!(config.group_name, "acme.example.com");
        assert_eq!(
            config.secrets_dir,
            PathBuf::from("/var/run/secrets/duckdns-webhook")
        );
        assert_eq!(config.provider, DuckDnsOptions::default());
        assert_eq!(config.deadline, None);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("GROUP_NAME", "acme.example.com"),
            ("DUCKDNS_SECRETS_DIR", "/tmp/secrets"),
            ("DUCKDNS_API_URL", "http://127.0.0.1:8080/update"),
            ("DUCKDNS_DNS_SERVERS", "1.1.1.1, 2606:4700:4700::1111"),
            ("DUCKDNS_LOOKUP_TIMEOUT_SECS", "3"),
            ("DUCKDNS_DEADLINE_SECS", "120"),
        ])
        .unwrap();
        assert_eq!(config.secrets_dir, PathBuf::from("/tmp/secrets"));
        assert_eq!(config.provider.base_url, "http://127.0.0.1:8080/update");
        assert_eq!(config.provider.nameservers.len(), 2);
        assert_eq!(config.provider.lookup_timeout, Duration::from_secs(3));
        assert_eq!(config.deadline, Some(Duration::from_secs(120)));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(
            config_from(&[("GROUP_NAME", "g"), ("DUCKDNS_DNS_SERVERS", "not-an-ip")]).is_err()
        );
        assert!(
            config_from(&[("GROUP_NAME", "g"), ("DUCKDNS_LOOKUP_TIMEOUT_SECS", "ten")]).is_err()
        );
        assert!(config_from(&[("GROUP_NAME", "g"), ("DUCKDNS_DEADLINE_SECS", "0")]).is_err());
    }
}
