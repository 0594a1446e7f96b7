pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dns_survey_domain::{LookupError, TransportProtocol};
use std::net::SocketAddr;
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError>;

    fn protocol_name(&self) -> &'static str;
}

/// Enum-dispatched transport, matched per query instead of boxed.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

/// Create the transport for a protocol selector, bound to one upstream.
pub fn create_transport(protocol: TransportProtocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}
