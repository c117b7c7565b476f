//! Error types for the pharmacology search client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Search client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Query failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// True when the failure happened after a response body was obtained but
    /// could not be interpreted.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse(_) | Error::Json(_))
    }
}
