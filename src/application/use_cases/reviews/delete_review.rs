//! Delete Review Use Case

use std::sync::Arc;

use crate::domain::gateways::ReviewRepository;
use crate::domain::models::record::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a review
pub struct DeleteReviewUseCase {
    review_repository: Arc<dyn ReviewRepository>,
}

impl DeleteReviewUseCase {
    /// Create a new DeleteReviewUseCase
    #[must_use]
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no review has this id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(review_id = %id, "Deleting review");

        if !self.review_repository.delete(id).await? {
            tracing::warn!(review_id = %id, "Review not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Review",
                id: id.to_string(),
            });
        }

        tracing::info!(review_id = %id, "Review deleted successfully");
        Ok(())
    }
}
