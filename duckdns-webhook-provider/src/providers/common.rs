//! Shared helpers for provider implementations: record name handling.

use crate::error::{ProviderError, Result};
use crate::types::RecordEntry;

/// Strip trailing absolute-name separators (`"a.example.org."` -> `"a.example.org"`).
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Derive the provider entry label and the un-FQDN'd zone from a challenge.
///
/// `zone` and `fqdn` are both absolute (trailing `.`), e.g. `example.duckdns.org.` and
/// `_acme-challenge.example.duckdns.org.`, which yields entry `_acme-challenge` and
/// domain `example.duckdns.org`.
///
/// The zone suffix is matched ASCII case-insensitively and must sit on a label
/// boundary. A name outside its zone is rejected instead of being passed through.
/// When `fqdn` is the zone itself the entry is the domain, as for single-label
/// dynamic DNS hosts.
pub fn resolve_entry(zone: &str, fqdn: &str) -> Result<RecordEntry> {
    let domain = normalize_domain_name(zone);
    if domain.is_empty() {
        return Err(invalid("zone", format!("zone '{zone}' is empty")));
    }

    let remainder = strip_zone_suffix(fqdn, zone).ok_or_else(|| {
        invalid(
            "fqdn",
            format!("challenge name '{fqdn}' is not inside zone '{zone}'"),
        )
    })?;

    let entry = normalize_domain_name(remainder);
    if entry.is_empty() {
        return Ok(RecordEntry {
            entry: domain.clone(),
            domain,
        });
    }

    Ok(RecordEntry { entry, domain })
}

/// Returns the part of `fqdn` in front of `zone`, or `None` when `fqdn` is not
/// `zone` or a name below it.
fn strip_zone_suffix<'a>(fqdn: &'a str, zone: &str) -> Option<&'a str> {
    let start = fqdn.len().checked_sub(zone.len())?;
    if !fqdn.is_char_boundary(start) || !fqdn[start..].eq_ignore_ascii_case(zone) {
        return None;
    }

    let remainder = &fqdn[..start];
    if remainder.is_empty() || remainder.ends_with('.') || zone.starts_with('.') {
        Some(remainder)
    } else {
        None
    }
}

fn invalid(param: &str, detail: String) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: crate::providers::duckdns::PROVIDER_NAME.to_string(),
        param: param.to_string(),
        detail,
    }
}
