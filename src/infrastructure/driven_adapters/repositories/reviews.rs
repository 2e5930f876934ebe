//! PostgreSQL Review Repository Implementation

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::collection::{Collection, DocumentCollection};
use crate::domain::gateways::ReviewRepository;
use crate::domain::models::record::{Document, Record, RecordId, UpdateOutcome};
use crate::domain::models::review::{NewReview, ReviewStatus};
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of ReviewRepository
pub struct PostgresReviewRepository {
    reviews: DocumentCollection,
}

impl PostgresReviewRepository {
    /// Create a new PostgresReviewRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            reviews: DocumentCollection::new(pool, Collection::Reviews),
        }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        self.reviews.find_all().await
    }

    async fn insert(&self, review: &NewReview) -> Result<Record, RepositoryError> {
        self.reviews.insert_one(review.to_document()).await
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: ReviewStatus,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let mut fields = Document::new();
        fields.insert("status".to_string(), Value::String(status.as_str().to_string()));
        self.reviews.set_fields(id, &fields).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        self.reviews.delete_one(id).await
    }
}
