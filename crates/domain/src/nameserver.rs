use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Standard DNS port; every surveyed server is queried on it.
pub const DNS_PORT: u16 = 53;

/// One public nameserver as listed by the directory service.
///
/// The directory serves more fields than the survey strictly needs
/// (`version`, `error`, check timestamps); they are kept so a row carries
/// the full record regardless of which columns end up rendered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameserverEntry {
    pub ip: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country_id: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub dnssec: bool,

    #[serde(default)]
    pub reliability: f64,

    #[serde(default)]
    pub checked_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NameserverEntry {
    /// Parse the directory-provided address string.
    pub fn ip_addr(&self) -> Result<IpAddr, String> {
        self.ip
            .parse()
            .map_err(|e| format!("Invalid nameserver address '{}': {}", self.ip, e))
    }

    /// The port-53 target this server is queried at.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        Ok(SocketAddr::new(self.ip_addr()?, DNS_PORT))
    }
}
