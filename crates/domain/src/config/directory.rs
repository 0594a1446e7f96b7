use serde::{Deserialize, Serialize};

/// Nameserver directory service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Base URL of the directory service. Region lists are fetched from
    /// `{base_url}/nameserver/{region}.json`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the directory fetch, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://public-dns.info".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}
