use bytes::Bytes;
use dns_survey_domain::LookupError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

/// The pieces of an upstream answer the survey cares about.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub addresses: Vec<IpAddr>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl ParsedResponse {
    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a DNS response, collecting A/AAAA answer records.
    pub fn parse_bytes(response_bytes: Bytes) -> Result<ParsedResponse, LookupError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            LookupError::InvalidResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.metadata.response_code;
        let truncated = message.metadata.truncation;

        let mut addresses = Vec::with_capacity(message.answers.len().min(8));
        for record in &message.answers {
            match &record.data {
                RData::A(a) => {
                    addresses.push(IpAddr::V4(a.0));
                }
                RData::AAAA(aaaa) => {
                    addresses.push(IpAddr::V6(aaaa.0));
                }
                // CNAMEs and anything else are not presented by the survey
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.metadata.id,
            addresses,
            rcode,
            truncated,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, LookupError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }
}
