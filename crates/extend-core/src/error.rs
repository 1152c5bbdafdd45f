//! Error Types

use thiserror::Error;

use crate::models::ErrorBody;

/// Why a day count was refused before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid day count")]
    InvalidDayCount,
    #[error("day count must be positive")]
    NotPositive,
    #[error("day count exceeds maximum of {max}")]
    ExceedsMaximum { max: u32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtendError {
    /// Non-2xx response; `body` is whatever JSON error payload came back
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, body: ErrorBody },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    /// The page tagged a card with an id the server cannot take
    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ExtendError {
    /// The server's `error` field, used by the preview endpoint
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ExtendError::Rejected { body, .. } => body.error_text(),
            _ => None,
        }
    }

    /// The server's `message` field, used by the extend endpoint
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ExtendError::Rejected { body, .. } => body.message_text(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ExtendError {
    fn from(err: serde_json::Error) -> Self {
        ExtendError::Decode(err.to_string())
    }
}

pub type ExtendResult<T> = Result<T, ExtendError>;
