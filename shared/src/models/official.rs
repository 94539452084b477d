//! Official-related models

use serde::{Deserialize, Serialize};

/// Municipal department an official registers under
///
/// Wire values are the human-readable names the backend stores
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Public Works")]
    PublicWorks,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Health & Safety")]
    HealthAndSafety,
    #[serde(rename = "Parks & Recreation")]
    ParksAndRecreation,
    #[serde(rename = "Other")]
    Other,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::PublicWorks => "Public Works",
            Department::Transportation => "Transportation",
            Department::HealthAndSafety => "Health & Safety",
            Department::ParksAndRecreation => "Parks & Recreation",
            Department::Other => "Other",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_serializes_to_display_names() {
        assert_eq!(
            serde_json::to_string(&Department::HealthAndSafety).unwrap(),
            "\"Health & Safety\""
        );
        let parsed: Department = serde_json::from_str("\"Parks & Recreation\"").unwrap();
        assert_eq!(parsed, Department::ParksAndRecreation);
    }
}
