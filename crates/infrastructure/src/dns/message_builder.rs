//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`,
//! giving the lookup engine full control over what goes to the upstream.

use dns_survey_domain::LookupError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query and serialize it, returning the message ID along
    /// with the bytes so the response can be matched against it.
    ///
    /// Creates a standard recursive query: random ID, RD flag set, a
    /// single question in class IN.
    pub fn build_query(host: &str, record_type: RecordType) -> Result<(u16, Vec<u8>), LookupError> {
        let name = Name::from_str(host)
            .map_err(|e| LookupError::InvalidHostName(host.to_string(), e.to_string()))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, LookupError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            LookupError::InvalidResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
