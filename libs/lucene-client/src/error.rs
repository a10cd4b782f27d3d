//! Error types for the lucene client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Lucene client errors
#[derive(Error, Debug)]
pub enum Error {
    /// The query cannot be executed as given (for example an empty query
    /// string). Raised before any I/O happens.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Connection-level failure raised by the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The index service answered, but with a non-success status.
    #[error("Search service returned status {status}: {body}")]
    Remote { status: u16, body: String },

    /// The response body could not be interpreted as a search result.
    #[error("Response mapping error: {0}")]
    Mapping(String),
}

impl From<json5::Error> for Error {
    fn from(err: json5::Error) -> Self {
        Error::Mapping(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Mapping(err.to_string())
    }
}
