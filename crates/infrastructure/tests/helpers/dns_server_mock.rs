#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// Answer with one address record matching the question type.
    Answer,
    /// Answer with NOERROR and an empty answer section.
    NoData,
    /// Never answer; lets clients run into their timeout.
    Silent,
}

/// Mock DNS server for tests.
///
/// Answers queries with canned responses so transport and lookup tests
/// do not depend on real DNS. Listens on UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an OS-assigned localhost port.
    pub async fn start(mode: MockMode) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;
        let listener = TcpListener::bind(local_addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if mode == MockMode::Silent {
                                continue;
                            }
                            let response = Self::build_mock_response(&buf[..len], mode);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            if mode == MockMode::Silent {
                                continue;
                            }
                            let _ = Self::serve_tcp(&mut stream, mode).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn serve_tcp(
        stream: &mut tokio::net::TcpStream,
        mode: MockMode,
    ) -> Result<(), std::io::Error> {
        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await?;
        let len = u16::from_be_bytes(len_buf) as usize;

        let mut query = vec![0u8; len];
        stream.read_exact(&mut query).await?;

        let response = Self::build_mock_response(&query, mode);
        stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await?;
        stream.write_all(&response).await?;
        Ok(())
    }

    /// Question type, read by skipping the name labels after the header.
    fn question_type(query: &[u8]) -> u16 {
        let mut pos = 12;
        while pos < query.len() && query[pos] != 0 {
            pos += 1 + query[pos] as usize;
        }
        // pos is at the root label; qtype follows it
        if pos + 2 < query.len() {
            u16::from_be_bytes([query[pos + 1], query[pos + 2]])
        } else {
            1
        }
    }

    fn build_mock_response(query: &[u8], mode: MockMode) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let answers: u16 = match mode {
            MockMode::Answer => 1,
            _ => 0,
        };

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // Transaction ID
        response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
        response.push(0x80); // RA=1, Z=0, RCODE=0
        response.extend_from_slice(&query[4..6]); // Questions count
        response.extend_from_slice(&answers.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]); // Authority RRs
        response.extend_from_slice(&[0x00, 0x00]); // Additional RRs

        // Copy question section
        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        if answers == 1 {
            let qtype = Self::question_type(query);
            response.extend_from_slice(&[0xc0, 0x0c]); // Name pointer to question
            if qtype == 28 {
                // AAAA: 2001:db8::53
                response.extend_from_slice(&[0x00, 0x1c]); // Type AAAA
                response.extend_from_slice(&[0x00, 0x01]); // Class IN
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]); // TTL
                response.extend_from_slice(&[0x00, 0x10]); // Data length: 16
                response.extend_from_slice(&[
                    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x53,
                ]);
            } else {
                // A: 93.184.216.34
                response.extend_from_slice(&[0x00, 0x01]); // Type A
                response.extend_from_slice(&[0x00, 0x01]); // Class IN
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]); // TTL
                response.extend_from_slice(&[0x00, 0x04]); // Data length: 4
                response.extend_from_slice(&[93, 184, 216, 34]);
            }
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
