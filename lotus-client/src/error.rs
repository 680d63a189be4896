//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every failure mode of a backend call is normalized here: transport
/// errors, non-2xx statuses (with the interesting ones split out), and
/// 2xx responses whose body is not the JSON we asked for.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network / connection failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response was 2xx but not parseable as the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (HTTP 401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (HTTP 403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (HTTP 400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-2xx response, body trimmed for display
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this error should flip the console's session-expired flag.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
