use dns_survey_domain::{FetchError, SurveyRow};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{HostLookup, NameserverDirectory};

/// Use case for surveying how a host resolves across a region's public
/// nameservers.
///
/// Fetches the region's nameserver list, then queries each listed server
/// in order, up to `max_servers`. Individual server failures are absorbed
/// into empty rows; only a directory failure aborts the survey.
pub struct SurveyRegionUseCase {
    directory: Arc<dyn NameserverDirectory>,
    lookup: Arc<dyn HostLookup>,
}

impl SurveyRegionUseCase {
    pub fn new(directory: Arc<dyn NameserverDirectory>, lookup: Arc<dyn HostLookup>) -> Self {
        Self { directory, lookup }
    }

    /// Run the survey.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SurveyRow>)` - One row per queried server, in directory
    ///   order, exactly `min(max_servers, list length)` of them
    /// * `Err(FetchError)` - If the nameserver list could not be fetched
    #[instrument(skip(self))]
    pub async fn run(
        &self,
        host: &str,
        region: &str,
        max_servers: usize,
    ) -> Result<Vec<SurveyRow>, FetchError> {
        let servers = self.directory.fetch(region).await?;
        info!(
            region = %region,
            listed = servers.len(),
            max_servers = max_servers,
            "Nameserver list fetched"
        );

        let mut rows = Vec::with_capacity(max_servers.min(servers.len()));
        for server in servers.into_iter().take(max_servers) {
            let target = match server.socket_addr() {
                Ok(addr) => addr,
                Err(e) => {
                    // Directory entries occasionally carry unparseable
                    // addresses; treat like any other per-server failure.
                    warn!(server = %server.ip, error = %e, "Skipping lookup, bad address");
                    rows.push(SurveyRow::empty(server));
                    continue;
                }
            };

            match self.lookup.lookup(host, target).await {
                Ok(addresses) => {
                    debug!(server = %server.ip, resolved = addresses.len(), "Lookup completed");
                    rows.push(SurveyRow::new(server, addresses));
                }
                Err(e) => {
                    warn!(server = %server.ip, error = %e, "Lookup failed");
                    rows.push(SurveyRow::empty(server));
                }
            }
        }

        info!(
            rows = rows.len(),
            answered = rows.iter().filter(|r| r.answered()).count(),
            "Survey completed"
        );
        Ok(rows)
    }
}
