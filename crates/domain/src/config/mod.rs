//! Configuration module for Dns Survey
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `directory`: Nameserver directory service settings
//! - `query`: Per-server query settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod directory;
pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use directory::DirectoryConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};
