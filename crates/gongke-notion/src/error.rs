//! Error types for the Notion client.

use thiserror::Error;

/// Result type alias for Notion client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while creating a page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The API rejected the call (auth failure, schema mismatch, invalid
    /// property name, rate limit). Carries the API's own message when the
    /// error body had one.
    #[error("Notion API error (HTTP {status})")]
    Api {
        /// HTTP status code of the rejection.
        status: u16,
        /// Human-readable message from the error body, if present.
        message: Option<String>,
    },

    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// The most specific message available for surfacing to a caller:
    /// the API's own message when present, otherwise the error's display
    /// form.
    pub fn surface_message(&self) -> String {
        match self {
            Error::Api {
                message: Some(msg), ..
            } => msg.clone(),
            other => other.to_string(),
        }
    }
}
