//! Teacher Repository Gateway

use async_trait::async_trait;

use crate::domain::models::record::{Document, Record, RecordId, UpdateOutcome};
use crate::domain::models::teacher::TeacherProfile;
use crate::shared::errors::RepositoryError;

/// Repository trait for Teacher persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Every teacher record, in insertion order
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;

    /// Insert an arbitrary teacher body, returning the issued id
    async fn insert(&self, document: Document) -> Result<RecordId, RepositoryError>;

    /// Overwrite the four profile fields of one teacher
    async fn update_profile(
        &self,
        id: &RecordId,
        profile: &TeacherProfile,
    ) -> Result<UpdateOutcome, RepositoryError>;

    /// Remove a teacher, returning whether a record was deleted
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
