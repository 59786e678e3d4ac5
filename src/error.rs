//! Error types for the dfslib library.

use thiserror::Error;

/// Main error type for dfslib operations.
#[derive(Error, Debug)]
pub enum DfsError {
    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Transport failure outside of reqwest (custom transports).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not decode to the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Server URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Local file access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Server answered with a status the operation does not accept.
    #[error("Rejected by server ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The upload reached the server but the listing after it failed.
    #[error("Uploaded {file} (status {status}) but refreshing the list failed: {source}")]
    RefreshAfterUpload {
        file: String,
        status: u16,
        #[source]
        source: Box<DfsError>,
    },

    /// Request did not complete within the configured timeout.
    #[error("HTTP request timed out")]
    Timeout,

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dfslib operations.
pub type Result<T> = std::result::Result<T, DfsError>;
