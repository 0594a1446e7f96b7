use dns_survey_domain::Config;

pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        // the table goes to stdout; keep diagnostics out of its way
        .with_writer(std::io::stderr)
        .init();
}
