//! Problem Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a reported problem
///
/// Transitions happen server-side only; the client reads and displays
/// the value and may request a change via the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemStatus {
    Open,
    UnderReview,
    Resolved,
    Rejected,
}

impl ProblemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Open => "OPEN",
            ProblemStatus::UnderReview => "UNDER_REVIEW",
            ProblemStatus::Resolved => "RESOLVED",
            ProblemStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reported civic issue, as returned by the backend
///
/// Created by the backend on submission. `status` and
/// `resolution_count` are mutated server-side only. Timestamps are
/// naive local datetimes (the backend emits them without an offset).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: Uuid,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub status: ProblemStatus,
    /// Content-safety confidence computed by the backend moderation
    /// pipeline, in [0, 1].
    pub ai_moderation_score: f64,
    #[serde(default)]
    pub resolution_count: u32,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_deserializes_backend_json() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "imageUrl": "https://cdn.example.com/img/abc.jpg",
            "latitude": 45.0,
            "longitude": -122.0,
            "description": "Pothole on the main road",
            "status": "UNDER_REVIEW",
            "aiModerationScore": 0.93,
            "resolutionCount": 2,
            "createdAt": "2025-06-01T09:30:00",
            "updatedAt": "2025-06-02T10:00:00"
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.status, ProblemStatus::UnderReview);
        assert_eq!(problem.resolution_count, 2);
        assert_eq!(problem.latitude, 45.0);
        assert_eq!(problem.created_at.format("%Y-%m-%d").to_string(), "2025-06-01");
    }

    #[test]
    fn resolution_count_defaults_to_zero() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "imageUrl": "https://cdn.example.com/img/abc.jpg",
            "latitude": 0.0,
            "longitude": 0.0,
            "description": "Broken street light",
            "status": "OPEN",
            "aiModerationScore": 0.5,
            "createdAt": "2025-06-01T09:30:00"
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.resolution_count, 0);
        assert!(problem.updated_at.is_none());
    }

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&ProblemStatus::UnderReview).unwrap(),
            "\"UNDER_REVIEW\""
        );
        assert_eq!(ProblemStatus::Resolved.to_string(), "RESOLVED");
    }
}
