use async_trait::async_trait;
use bytes::Bytes;
use dns_survey_application::ports::NameserverDirectory;
use dns_survey_domain::{FetchError, NameserverEntry};
use std::time::Duration;
use tracing::debug;

/// Directory client for `public-dns.info`-style services.
///
/// One GET per fetch, no retries: a region list that cannot be retrieved
/// leaves nothing to survey.
pub struct PublicDnsDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl PublicDnsDirectory {
    /// Build a client with the given fetch timeout.
    ///
    /// The timeout covers the whole request, connect included. It is
    /// independent of the per-query DNS timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn region_url(&self, region: &str) -> String {
        format!("{}/nameserver/{}.json", self.base_url, region)
    }
}

#[async_trait]
impl NameserverDirectory for PublicDnsDirectory {
    async fn fetch(&self, region: &str) -> Result<Vec<NameserverEntry>, FetchError> {
        let url = self.region_url(region);
        debug!(url = %url, "Fetching nameserver list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let entries: Vec<NameserverEntry> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        debug!(region = %region, entries = entries.len(), bytes = body.len(), "Nameserver list parsed");
        Ok(entries)
    }
}
