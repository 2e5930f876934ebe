//! Review Domain Model
//!
//! Reviews start out `Pending` and are moderated to `Approved` or `Rejected`.

use std::str::FromStr;

use serde_json::Value;

use crate::domain::models::record::Document;
use crate::shared::errors::DomainError;

/// Lifecycle status of a review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(DomainError::InvalidReviewStatus(other.to_string())),
        }
    }
}

/// Moderation outcome; the only statuses a review can be moved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl FromStr for ReviewDecision {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(DomainError::InvalidReviewDecision(other.to_string())),
        }
    }
}

impl From<ReviewDecision> for ReviewStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => Self::Approved,
            ReviewDecision::Rejected => Self::Rejected,
        }
    }
}

/// Data required to create a new Review
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReview {
    pub user: Option<Value>,
    pub date: Option<Value>,
    pub rating: Option<Value>,
    pub feedback: Option<Value>,
    pub status: ReviewStatus,
}

impl NewReview {
    /// Document to be stored; absent attributes are left out
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for (key, value) in [
            ("user", &self.user),
            ("date", &self.date),
            ("rating", &self.rating),
            ("feedback", &self.feedback),
        ] {
            if let Some(value) = value {
                document.insert(key.to_string(), value.clone());
            }
        }
        document.insert(
            "status".to_string(),
            Value::String(self.status.as_str().to_string()),
        );
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ReviewStatus::default(), ReviewStatus::Pending);
        let document = NewReview::default().to_document();
        assert_eq!(document.get("status"), Some(&json!("Pending")));
    }

    #[test]
    fn test_decision_excludes_pending() {
        assert!("Pending".parse::<ReviewDecision>().is_err());
        assert!("approved".parse::<ReviewDecision>().is_err());
        assert_eq!("Approved".parse::<ReviewDecision>(), Ok(ReviewDecision::Approved));
        assert_eq!(
            ReviewStatus::from(ReviewDecision::Rejected),
            ReviewStatus::Rejected
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Pending".parse::<ReviewStatus>(), Ok(ReviewStatus::Pending));
        assert_eq!(
            "Maybe".parse::<ReviewStatus>(),
            Err(DomainError::InvalidReviewStatus("Maybe".into()))
        );
    }

    #[test]
    fn test_to_document_omits_absent_fields() {
        let review = NewReview {
            user: Some(json!("ada@x.com")),
            rating: Some(json!(5)),
            status: ReviewStatus::Approved,
            ..Default::default()
        };

        let document = review.to_document();
        assert_eq!(document.len(), 3);
        assert_eq!(document.get("rating"), Some(&json!(5)));
        assert_eq!(document.get("status"), Some(&json!("Approved")));
        assert!(document.get("feedback").is_none());
    }
}
