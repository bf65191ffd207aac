//! DuckDNS `TxtRecordProvider` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ProviderErrorMapper, TxtRecordProvider};

use super::{DuckDnsProvider, PROVIDER_NAME};

#[async_trait]
impl TxtRecordProvider for DuckDnsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn create_record(&self, entry: &str, value: &str) -> Result<()> {
        // curl "https://www.duckdns.org/update?domains=<DOMAIN>&token=<TOKEN>&txt=<TXT>"
        self.update(entry, value, false).await?;
        log::info!("[{}] TXT record set for {entry}", self.provider_name());
        Ok(())
    }

    async fn delete_record(&self, entry: &str, value: &str) -> Result<()> {
        // curl "https://www.duckdns.org/update?domains=<DOMAIN>&token=<TOKEN>&txt=<TXT>&clear=true"
        self.update(entry, value, true).await?;
        log::info!("[{}] TXT record cleared for {entry}", self.provider_name());
        Ok(())
    }

    async fn lookup_record(&self, fqdn: &str) -> Result<Option<String>> {
        if fqdn.trim_end_matches('.').is_empty() {
            return Err(self.invalid_parameter("fqdn", "name must not be empty"));
        }
        self.lookup.lookup_txt(fqdn).await
    }
}
