use crate::protocol::TransportProtocol;
use serde::{Deserialize, Serialize};

/// Per-server query configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Transport used for every query in a run.
    #[serde(default)]
    pub protocol: TransportProtocol,

    /// Per-query timeout, in seconds.
    #[serde(default = "default_query_timeout")]
    pub timeout_secs: u64,

    /// How many servers from the directory list are queried at most.
    #[serde(default = "default_max_servers")]
    pub max_servers: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            protocol: TransportProtocol::default(),
            timeout_secs: default_query_timeout(),
            max_servers: default_max_servers(),
        }
    }
}

fn default_query_timeout() -> u64 {
    3
}

fn default_max_servers() -> usize {
    10
}
