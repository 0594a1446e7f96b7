//! Dns Survey Domain Layer
pub mod config;
pub mod errors;
pub mod nameserver;
pub mod protocol;
pub mod survey;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, DirectoryConfig, LoggingConfig, QueryConfig};
pub use errors::{FetchError, LookupError};
pub use nameserver::NameserverEntry;
pub use protocol::TransportProtocol;
pub use survey::SurveyRow;
