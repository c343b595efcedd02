//! Error types for the CRM client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during CRM client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the CRM API.
    #[error("API error ({status}) at {url}: {message}{}", .correlation_id.as_ref().map(|id| format!(" [Correlation ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        correlation_id: Option<String>,
    },

    /// Invalid response format from the CRM API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Client was built without credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates a rejected token or missing scope.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
