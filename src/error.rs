use reqwest::StatusCode;
use thiserror::Error;

use crate::nodes::models::ValidationError;

/// Failures surfaced by the high-level client.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or, when enabled, an undocumented status.
    #[error(transparent)]
    Raw(#[from] alfresco_raw::Error),

    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidArgument(String),

    /// The server answered but no usable payload came back.
    #[error("{message}")]
    Failed {
        message: String,
        status: Option<StatusCode>,
    },

    #[error("model conversion failed: {0}")]
    Conversion(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Failed { status, .. } => *status,
            Error::Raw(alfresco_raw::Error::UnexpectedStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
