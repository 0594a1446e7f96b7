//! Dns Survey Infrastructure Layer
//!
//! Adapters behind the application ports: the `public-dns.info` directory
//! client and the wire-level DNS lookup engine.
pub mod directory;
pub mod dns;

pub use directory::PublicDnsDirectory;
pub use dns::WireHostLookup;
