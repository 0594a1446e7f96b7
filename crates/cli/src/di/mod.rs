//! Composition root: builds the concrete adapters behind the ports.

use dns_survey_application::SurveyRegionUseCase;
use dns_survey_domain::Config;
use dns_survey_infrastructure::{PublicDnsDirectory, WireHostLookup};
use std::sync::Arc;
use std::time::Duration;

pub fn build_survey(config: &Config) -> anyhow::Result<SurveyRegionUseCase> {
    let directory = PublicDnsDirectory::new(
        config.directory.base_url.clone(),
        Duration::from_secs(config.directory.fetch_timeout_secs),
    )?;

    let lookup = WireHostLookup::new(
        config.query.protocol,
        Duration::from_secs(config.query.timeout_secs),
    );

    Ok(SurveyRegionUseCase::new(
        Arc::new(directory),
        Arc::new(lookup),
    ))
}
