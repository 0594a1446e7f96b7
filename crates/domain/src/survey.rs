use crate::nameserver::NameserverEntry;
use std::net::IpAddr;

/// One surveyed server together with whatever it resolved.
///
/// An empty `addresses` vec means the server failed to answer within its
/// timeout or answered with nothing; the row is still presented.
#[derive(Debug, Clone)]
pub struct SurveyRow {
    pub server: NameserverEntry,
    pub addresses: Vec<IpAddr>,
}

impl SurveyRow {
    pub fn new(server: NameserverEntry, addresses: Vec<IpAddr>) -> Self {
        Self { server, addresses }
    }

    /// Row for a server that produced no usable answer.
    pub fn empty(server: NameserverEntry) -> Self {
        Self {
            server,
            addresses: Vec::new(),
        }
    }

    pub fn answered(&self) -> bool {
        !self.addresses.is_empty()
    }
}
