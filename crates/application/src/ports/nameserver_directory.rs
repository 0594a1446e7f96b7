use async_trait::async_trait;
use dns_survey_domain::{FetchError, NameserverEntry};

/// Source of the per-region public nameserver list.
#[async_trait]
pub trait NameserverDirectory: Send + Sync {
    /// Fetch the nameserver list for a region, in directory order.
    async fn fetch(&self, region: &str) -> Result<Vec<NameserverEntry>, FetchError>;
}
