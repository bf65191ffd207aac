//! TXT record verification before removal

use duckdns_webhook_provider::TxtRecordProvider;

use crate::error::{CoreResult, VerificationError};

/// Confirms the published TXT value belongs to the challenge being cleaned up
///
/// Comparison is byte-for-byte. A missing record never matches.
pub struct RecordVerifier;

impl RecordVerifier {
    /// Compare an already looked-up value with the expected one.
    pub fn check(expected: &str, found: Option<&str>) -> Result<(), VerificationError> {
        match found {
            Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
            _ => Err(VerificationError::ValueMismatch {
                expected: expected.to_string(),
                found: found.map(str::to_string),
            }),
        }
    }

    /// Look up `fqdn` through `provider` and compare the result with `expected`.
    pub async fn verify(
        provider: &dyn TxtRecordProvider,
        fqdn: &str,
        expected: &str,
    ) -> CoreResult<()> {
        let found = provider.lookup_record(fqdn).await?;
        Self::check(expected, found.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::MockProvider;

    const FQDN: &str = "_acme-challenge.myhost.duckdns.org.";

    #[test]
    fn equal_values_match() {
        assert_eq!(RecordVerifier::check("xyz789", Some("xyz789")), Ok(()));
    }

    #[test]
    fn comparison_is_exact() {
        for found in ["XYZ789", "xyz789 ", "xyz78"] {
            assert_eq!(
                RecordVerifier::check("xyz789", Some(found)),
                Err(VerificationError::ValueMismatch {
                    expected: "xyz789".to_string(),
                    found: Some(found.to_string()),
                })
            );
        }
    }

    #[test]
    fn missing_record_fails_closed() {
        assert_eq!(
            RecordVerifier::check("xyz789", None),
            Err(VerificationError::ValueMismatch {
                expected: "xyz789".to_string(),
                found: None,
            })
        );
    }

    #[tokio::test]
    async fn verify_uses_provider_lookup() {
        let provider = MockProvider::new();
        provider.set_txt(Some("xyz789")).await;

        assert_eq!(
            RecordVerifier::verify(&provider, FQDN, "xyz789").await,
            Ok(())
        );
        assert!(matches!(
            RecordVerifier::verify(&provider, FQDN, "other").await,
            Err(CoreError::Verification(_))
        ));
        assert_eq!(provider.lookups().await, vec![FQDN.to_string(); 2]);
    }

    #[tokio::test]
    async fn verify_propagates_lookup_failure() {
        let provider = MockProvider::new();
        provider
            .set_lookup_error(Some(duckdns_webhook_provider::ProviderError::LookupFailed {
                provider: "duckdns".to_string(),
                name: FQDN.to_string(),
                detail: "SERVFAIL".to_string(),
            }))
            .await;

        assert!(matches!(
            RecordVerifier::verify(&provider, FQDN, "xyz789").await,
            Err(CoreError::Provider(_))
        ));
    }
}
