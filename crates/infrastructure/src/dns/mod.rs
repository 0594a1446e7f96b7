pub mod lookup;
pub mod message_builder;
pub mod response_parser;
pub mod transport;

pub use lookup::WireHostLookup;
pub use message_builder::MessageBuilder;
pub use response_parser::{ParsedResponse, ResponseParser};
