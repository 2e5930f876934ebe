//! Review Repository Gateway

use async_trait::async_trait;

use crate::domain::models::record::{Record, RecordId, UpdateOutcome};
use crate::domain::models::review::{NewReview, ReviewStatus};
use crate::shared::errors::RepositoryError;

/// Repository trait for Review persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Every review record, in insertion order
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;

    /// Insert a new review, returning the stored record
    async fn insert(&self, review: &NewReview) -> Result<Record, RepositoryError>;

    /// Set the status of one review
    async fn update_status(
        &self,
        id: &RecordId,
        status: ReviewStatus,
    ) -> Result<UpdateOutcome, RepositoryError>;

    /// Remove a review, returning whether a record was deleted
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
