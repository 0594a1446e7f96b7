//! # Dns Survey
//!
//! Checks how a host resolves across the public DNS servers of a
//! geographic region, using the public-dns.info directory.

use clap::Parser;
use dns_survey_domain::{validators, CliOverrides, TransportProtocol};
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dns-survey")]
#[command(version)]
#[command(about = "Check how a host resolves across a region's public DNS servers")]
struct Cli {
    /// Host to resolve
    #[arg(short = 'n', long)]
    host: String,

    /// Region whose public DNS servers are queried (e.g. "us", "de", "kz")
    #[arg(short = 'r', long)]
    region: String,

    /// How many servers from the region list to query
    #[arg(short = 'c', long)]
    count: Option<usize>,

    /// Connect protocol (udp or tcp)
    #[arg(long)]
    protocol: Option<TransportProtocol>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Timeout in seconds for fetching the server list from the directory
    #[arg(long)]
    directory_timeout: Option<u64>,

    /// Show DNSSEC support and reliability for each server
    #[arg(short = 'd', long)]
    detail: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = validators::validate_host(&cli.host) {
        anyhow::bail!("Invalid host: {}", e);
    }
    if let Err(e) = validators::validate_region(&cli.region) {
        anyhow::bail!("Invalid region: {}", e);
    }

    let overrides = CliOverrides {
        protocol: cli.protocol,
        query_timeout_secs: cli.timeout,
        max_servers: cli.count,
        fetch_timeout_secs: cli.directory_timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        host = %cli.host,
        region = %cli.region,
        protocol = %config.query.protocol,
        max_servers = config.query.max_servers,
        "Starting survey"
    );

    let survey = di::build_survey(&config)?;
    let rows = survey
        .run(&cli.host, &cli.region, config.query.max_servers)
        .await?;

    print!("{}", output::render_table(&rows, cli.detail));

    Ok(())
}
