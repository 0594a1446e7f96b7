use async_trait::async_trait;
use dns_survey_domain::LookupError;
use std::net::{IpAddr, SocketAddr};

/// Forward address lookup through one specific upstream server.
///
/// Implementations must direct every query at `server` only, never at the
/// system-configured resolvers.
#[async_trait]
pub trait HostLookup: Send + Sync {
    async fn lookup(&self, host: &str, server: SocketAddr) -> Result<Vec<IpAddr>, LookupError>;
}
