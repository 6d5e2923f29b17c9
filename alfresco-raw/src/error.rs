use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the raw layer.
///
/// Documented API error statuses are not errors here; they come back as a
/// `None` body. See [`crate::Response`].
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP library failed (connect, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the endpoint does not document and
    /// the client was built with `raise_on_unexpected_status`.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
