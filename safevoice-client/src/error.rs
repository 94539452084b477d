//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (no response received)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: u16,
        /// Human-readable message from the backend error envelope, if
        /// one was present
        message: Option<String>,
    },

    /// Payload rejected before dispatch
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token storage error
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Request cancelled before a response arrived
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Single-line message for display.
    ///
    /// Validation failures and backend-supplied messages are surfaced
    /// verbatim; everything else collapses to the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(message) => message.clone(),
            ClientError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True if the backend rejected the request as unauthenticated.
    ///
    /// The stored token is never validated locally; a revoked token is
    /// only discovered here, at which point the caller clears the
    /// session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status: 401, .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ClientError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn missing_message_collapses_to_fallback() {
        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to load problems"), "Failed to load problems");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn validation_message_wins_over_fallback() {
        let err = ClientError::Validation("Image size must be less than 5MB".into());
        assert_eq!(err.user_message("Failed to report issue"), "Image size must be less than 5MB");
    }
}
