//! Create Review Use Case
//!
//! Persists a review; the status defaults to `Pending` when the caller omits it.

use std::sync::Arc;

use crate::domain::gateways::ReviewRepository;
use crate::domain::models::record::Record;
use crate::domain::models::review::NewReview;
use crate::shared::errors::UseCaseError;

/// Use case for submitting a review
pub struct CreateReviewUseCase {
    review_repository: Arc<dyn ReviewRepository>,
}

impl CreateReviewUseCase {
    /// Create a new CreateReviewUseCase
    #[must_use]
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, review: NewReview) -> Result<Record, UseCaseError> {
        tracing::info!(status = %review.status, "Creating new review");

        let created = self.review_repository.insert(&review).await?;

        tracing::info!(review_id = %created.id(), "Review created successfully");
        Ok(created)
    }
}
