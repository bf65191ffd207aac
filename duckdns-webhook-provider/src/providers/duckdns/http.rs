//! DuckDNS HTTP request methods

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;

use super::DuckDnsProvider;

impl DuckDnsProvider {
    /// `<base>?domains=<entry>&token=<token>`
    pub(crate) fn records_url(&self, entry: &str) -> String {
        format!(
            "{}?domains={}&token={}",
            self.base_url,
            urlencoding::encode(entry),
            urlencoding::encode(&self.api_token)
        )
    }

    /// `<base>?domains=<entry>&token=<token>&txt=<value>[&clear=true]`
    pub(crate) fn update_url(&self, entry: &str, value: &str, clear: bool) -> String {
        let mut url = format!("{}&txt={}", self.records_url(entry), urlencoding::encode(value));
        if clear {
            url.push_str("&clear=true");
        }
        url
    }

    /// Execute one update GET and apply the `OK`/`KO` protocol.
    pub(crate) async fn update(&self, entry: &str, value: &str, clear: bool) -> Result<()> {
        if entry.is_empty() {
            return Err(self.invalid_parameter("domains", "entry must not be empty"));
        }

        let url = self.update_url(entry, value, clear);
        let (status, body) = HttpUtils::execute_request(
            self.client.get(&url),
            self.provider_name(),
            "GET",
            &url,
        )
        .await?;

        self.check_response(status, &body)
    }
}
