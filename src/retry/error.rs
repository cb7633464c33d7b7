//! Request attempt error type for retry decisions.

use thiserror::Error;

/// Error yielded by a single request attempt (transport failure or a
/// response reclassified as a failure). Policies see this before anything
/// is converted to anyhow at the edges.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// The URL failed to parse before any transfer started.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// A response handler reclassified the response by status code.
    /// The response itself is dropped; only the code survives.
    #[error("HTTP {0}")]
    Status(u32),
    /// Custom failure raised by a caller-supplied response handler.
    #[error("{0}")]
    Handler(String),
}

impl RequestError {
    /// Status code carried by a `Status` reclassification, if that is what
    /// this error is.
    pub fn status(&self) -> Option<u32> {
        match self {
            RequestError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
