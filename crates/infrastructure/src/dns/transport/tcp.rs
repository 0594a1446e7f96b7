use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_survey_domain::LookupError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport.
///
/// Messages are framed with the RFC 1035 two-byte big-endian length
/// prefix. A fresh connection per query; the survey never reuses one.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError> {
        if message_bytes.len() > u16::MAX as usize {
            return Err(LookupError::Transport(format!(
                "DNS message too large for TCP framing: {} bytes",
                message_bytes.len()
            )));
        }

        let mut stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| LookupError::QueryTimeout)?
            .map_err(|e| {
                LookupError::Transport(format!(
                    "Failed to connect to {}: {}",
                    self.server_addr, e
                ))
            })?;

        // Length prefix + message in one write
        let mut framed = Vec::with_capacity(2 + message_bytes.len());
        framed.extend_from_slice(&(message_bytes.len() as u16).to_be_bytes());
        framed.extend_from_slice(message_bytes);

        tokio::time::timeout(timeout, stream.write_all(&framed))
            .await
            .map_err(|_| LookupError::QueryTimeout)?
            .map_err(|e| {
                LookupError::Transport(format!(
                    "Failed to send TCP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = framed.len(),
            "TCP query sent"
        );

        let mut len_buf = [0u8; 2];
        tokio::time::timeout(timeout, stream.read_exact(&mut len_buf))
            .await
            .map_err(|_| LookupError::QueryTimeout)?
            .map_err(|e| {
                LookupError::Transport(format!(
                    "Failed to read TCP response length from {}: {}",
                    self.server_addr, e
                ))
            })?;

        let response_len = u16::from_be_bytes(len_buf) as usize;
        let mut recv_buf = vec![0u8; response_len];

        tokio::time::timeout(timeout, stream.read_exact(&mut recv_buf))
            .await
            .map_err(|_| LookupError::QueryTimeout)?
            .map_err(|e| {
                LookupError::Transport(format!(
                    "Failed to read TCP response from {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            server = %self.server_addr,
            bytes_received = response_len,
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
