use async_trait::async_trait;
use dns_survey_application::ports::HostLookup;
use dns_survey_domain::{LookupError, TransportProtocol};
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::{create_transport, Transport};

/// Wire-level host lookup bound per call to a single upstream server.
///
/// Each `lookup` builds its own transport for the given server, so every
/// query goes to exactly that address rather than the system resolvers.
/// One A and one AAAA query are issued per server; either family failing
/// does not discard the other's answers.
pub struct WireHostLookup {
    protocol: TransportProtocol,
    timeout: Duration,
}

impl WireHostLookup {
    pub fn new(protocol: TransportProtocol, timeout: Duration) -> Self {
        Self { protocol, timeout }
    }

    async fn query_one(
        &self,
        transport: &Transport,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<IpAddr>, LookupError> {
        let (id, query_bytes) = MessageBuilder::build_query(host, record_type)?;

        let response = transport.send(&query_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(LookupError::InvalidResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, id
            )));
        }

        if parsed.is_server_error() {
            debug!(
                host = %host,
                record_type = %record_type,
                rcode = ?parsed.rcode,
                "Upstream answered with server error"
            );
        }

        // NXDOMAIN and NODATA simply contribute no addresses
        Ok(parsed.addresses)
    }
}

#[async_trait]
impl HostLookup for WireHostLookup {
    async fn lookup(&self, host: &str, server: SocketAddr) -> Result<Vec<IpAddr>, LookupError> {
        let transport = create_transport(self.protocol, server);

        let mut addresses = Vec::new();
        let mut last_error = None;

        for record_type in [RecordType::A, RecordType::AAAA] {
            match self.query_one(&transport, host, record_type).await {
                Ok(mut addrs) => addresses.append(&mut addrs),
                Err(e) => {
                    debug!(
                        server = %server,
                        record_type = %record_type,
                        protocol = %transport.protocol_name(),
                        error = %e,
                        "Query failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        match (addresses.is_empty(), last_error) {
            (true, Some(e)) => Err(e),
            (_, _) => Ok(addresses),
        }
    }
}
