//! List Reviews Use Case

use std::sync::Arc;

use crate::domain::gateways::ReviewRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for listing all reviews, whatever their status
pub struct ListReviewsUseCase {
    review_repository: Arc<dyn ReviewRepository>,
}

impl ListReviewsUseCase {
    /// Create a new ListReviewsUseCase
    #[must_use]
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Record>, UseCaseError> {
        let reviews = self.review_repository.find_all().await?;
        tracing::debug!(count = reviews.len(), "Reviews fetched");
        Ok(reviews)
    }
}
