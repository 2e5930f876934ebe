//! Update Review Status Use Case
//!
//! Moves a review to one of the moderation outcomes.

use std::sync::Arc;

use crate::domain::gateways::ReviewRepository;
use crate::domain::models::record::{RecordId, UpdateOutcome};
use crate::domain::models::review::{ReviewDecision, ReviewStatus};
use crate::shared::errors::UseCaseError;

/// Use case for approving or rejecting a review
pub struct UpdateReviewStatusUseCase {
    review_repository: Arc<dyn ReviewRepository>,
}

impl UpdateReviewStatusUseCase {
    /// Create a new UpdateReviewStatusUseCase
    #[must_use]
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFoundOrUnchanged` if no review has this id, or the
    /// review already carries the requested status.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &RecordId,
        decision: ReviewDecision,
    ) -> Result<UpdateOutcome, UseCaseError> {
        let status = ReviewStatus::from(decision);
        tracing::info!(review_id = %id, status = %status, "Updating review status");

        let outcome = self.review_repository.update_status(id, status).await?;

        if !outcome.is_modified() {
            tracing::warn!(
                review_id = %id,
                matched = outcome.matched,
                "Review not found or status unchanged"
            );
            return Err(UseCaseError::NotFoundOrUnchanged {
                resource: "Review",
                field: "status",
                id: id.to_string(),
            });
        }

        tracing::info!(review_id = %id, status = %status, "Review status updated successfully");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::review_repository::MockReviewRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_write_decision_as_status() {
        let mut repo = MockReviewRepository::new();
        repo.expect_update_status()
            .withf(|_, status| *status == ReviewStatus::Rejected)
            .times(1)
            .returning(|_, _| Ok(UpdateOutcome::new(1, 1)));

        let use_case = UpdateReviewStatusUseCase::new(Arc::new(repo));
        let outcome = use_case
            .execute(&RecordId::from_uuid(Uuid::new_v4()), ReviewDecision::Rejected)
            .await
            .unwrap();

        assert_eq!(outcome.modified, 1);
    }

    #[tokio::test]
    async fn should_report_not_found_or_unchanged_when_nothing_modified() {
        let mut repo = MockReviewRepository::new();
        repo.expect_update_status()
            .returning(|_, _| Ok(UpdateOutcome::new(0, 0)));

        let use_case = UpdateReviewStatusUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(&RecordId::from_uuid(Uuid::new_v4()), ReviewDecision::Approved)
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Review not found or status unchanged");
    }
}
