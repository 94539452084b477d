//! Client-related types shared with the backend API
//!
//! Request/response DTOs used in API communication. Field names follow
//! the backend's camelCase wire format.

use serde::{Deserialize, Serialize};

use crate::models::{Department, ProblemStatus};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// Only `access_token` matters to the session contract; the remaining
/// fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Official registration request
///
/// The backend queues the account for manual admin verification; no
/// token is issued on registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialRegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub official_id_number: String,
    pub department: Department,
}

// =============================================================================
// Problem API DTOs
// =============================================================================

/// Status update request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ProblemStatus,
}

// =============================================================================
// Error envelope
// =============================================================================

/// Error body returned by the backend on non-2xx responses
///
/// Every field is optional on decode so a truncated or foreign error
/// body still yields the fields it does carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub status_code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_camel_case() {
        let req = OfficialRegisterRequest {
            email: "jordan@city.gov".into(),
            password: "hunter2hunter2".into(),
            full_name: "Jordan Reyes".into(),
            official_id_number: "PW-1042".into(),
            department: Department::PublicWorks,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fullName"], "Jordan Reyes");
        assert_eq!(json["officialIdNumber"], "PW-1042");
        assert_eq!(json["department"], "Public Works");
    }

    #[test]
    fn error_envelope_tolerates_partial_bodies() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
        assert_eq!(err.message.as_deref(), Some("Invalid credentials"));
        assert!(err.status_code.is_none());

        let empty: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }

    #[test]
    fn auth_response_needs_only_the_token() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"accessToken": "tok-123"}"#).unwrap();
        assert_eq!(resp.access_token, "tok-123");
        assert!(resp.token_type.is_none());
    }
}
