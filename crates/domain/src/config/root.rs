use serde::{Deserialize, Serialize};

use super::directory::DirectoryConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use crate::protocol::TransportProtocol;

/// Main configuration, assembled from defaults, an optional TOML file,
/// and command-line overrides, in that precedence order.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub protocol: Option<TransportProtocol>,
    pub query_timeout_secs: Option<u64>,
    pub max_servers: Option<usize>,
    pub fetch_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                    path: path.to_string(),
                    source: e,
                })?;
                toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                    path: path.to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(protocol) = overrides.protocol {
            self.query.protocol = protocol;
        }
        if let Some(timeout) = overrides.query_timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(max) = overrides.max_servers {
            self.query.max_servers = max;
        }
        if let Some(timeout) = overrides.fetch_timeout_secs {
            self.directory.fetch_timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "directory.base_url cannot be empty".to_string(),
            ));
        }
        if !self.directory.base_url.starts_with("http://")
            && !self.directory.base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(format!(
                "directory.base_url must start with http:// or https://, got '{}'",
                self.directory.base_url
            )));
        }
        if self.directory.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "directory.fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "query.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.query.max_servers == 0 {
            return Err(ConfigError::Invalid(
                "query.max_servers must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
