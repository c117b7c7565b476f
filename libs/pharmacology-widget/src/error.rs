//! Error types for the pharmacology widget

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a fetch.
///
/// An empty result set is not an error; see [`crate::FetchOutcome::Empty`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Query failed: {0}")]
    Transport(#[source] pharmsearch_client::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] pharmsearch_client::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(u32),

    #[error("Invalid widget options: {0}")]
    InvalidOptions(String),
}

impl From<pharmsearch_client::Error> for Error {
    fn from(err: pharmsearch_client::Error) -> Self {
        if err.is_malformed() {
            Error::MalformedResponse(err)
        } else {
            Error::Transport(err)
        }
    }
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        Error::Render(err.to_string())
    }
}
