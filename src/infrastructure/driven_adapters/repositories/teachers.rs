//! PostgreSQL Teacher Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::collection::{Collection, DocumentCollection};
use crate::domain::gateways::TeacherRepository;
use crate::domain::models::record::{Document, Record, RecordId, UpdateOutcome};
use crate::domain::models::teacher::TeacherProfile;
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of TeacherRepository
pub struct PostgresTeacherRepository {
    teachers: DocumentCollection,
}

impl PostgresTeacherRepository {
    /// Create a new PostgresTeacherRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            teachers: DocumentCollection::new(pool, Collection::Teachers),
        }
    }
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        self.teachers.find_all().await
    }

    async fn insert(&self, document: Document) -> Result<RecordId, RepositoryError> {
        let record = self.teachers.insert_one(document).await?;
        Ok(*record.id())
    }

    async fn update_profile(
        &self,
        id: &RecordId,
        profile: &TeacherProfile,
    ) -> Result<UpdateOutcome, RepositoryError> {
        self.teachers.set_fields(id, &profile.to_document()).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        self.teachers.delete_one(id).await
    }
}
