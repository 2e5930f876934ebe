//! Review DTOs

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::models::review::{NewReview, ReviewDecision, ReviewStatus};
use crate::shared::errors::DomainError;

const INVALID_DECISION: &str =
    "Invalid status specified. Allowed values: 'Approved' or 'Rejected'";

/// Validates a status supplied on creation; an empty one counts as absent
fn validate_review_status(status: &str) -> Result<(), validator::ValidationError> {
    if status.is_empty() {
        return Ok(());
    }
    status.parse::<ReviewStatus>().map(|_| ()).map_err(|_| {
        let mut error = validator::ValidationError::new("status");
        error.message =
            Some("Invalid status specified. Allowed values: 'Pending', 'Approved' or 'Rejected'".into());
        error
    })
}

/// Validates a moderation decision
fn validate_review_decision(status: &str) -> Result<(), validator::ValidationError> {
    status.parse::<ReviewDecision>().map(|_| ()).map_err(|_| {
        let mut error = validator::ValidationError::new("status");
        error.message = Some(INVALID_DECISION.into());
        error
    })
}

/// DTO for submitting a review
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateReviewDto {
    pub user: Option<Value>,
    pub date: Option<Value>,
    pub rating: Option<Value>,
    pub feedback: Option<Value>,

    #[validate(custom(function = "validate_review_status"))]
    pub status: Option<String>,
}

impl TryFrom<CreateReviewDto> for NewReview {
    type Error = DomainError;

    fn try_from(dto: CreateReviewDto) -> Result<Self, Self::Error> {
        let status = dto
            .status
            .as_deref()
            .filter(|status| !status.is_empty())
            .map(str::parse::<ReviewStatus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            user: dto.user,
            date: dto.date,
            rating: dto.rating,
            feedback: dto.feedback,
            status,
        })
    }
}

/// DTO for approving or rejecting a review
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewStatusDto {
    #[validate(
        required(message = "Invalid status specified. Allowed values: 'Approved' or 'Rejected'"),
        custom(function = "validate_review_decision")
    )]
    pub status: Option<String>,
}

impl UpdateReviewStatusDto {
    /// The requested decision
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReviewDecision` for anything but `Approved` or `Rejected`.
    pub fn decision(&self) -> Result<ReviewDecision, DomainError> {
        self.status.as_deref().unwrap_or_default().parse()
    }
}
