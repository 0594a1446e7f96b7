use thiserror::Error;

/// Fatal failure while retrieving the nameserver directory.
///
/// Without a directory there is nothing to survey, so these abort the run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Directory request failed: {0}")]
    Request(String),

    #[error("Directory returned HTTP status {0}")]
    Status(u16),

    #[error("Malformed directory response: {0}")]
    Malformed(String),
}

/// Per-server lookup failure.
///
/// Absorbed by the survey loop: the affected server gets an empty result
/// and the remaining servers are still queried.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid host name '{0}': {1}")]
    InvalidHostName(String, String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),
}
