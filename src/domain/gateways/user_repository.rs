//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::record::{Record, RecordId, UpdateOutcome};
use crate::domain::models::user::{NewUser, UserRole};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user record, in insertion order
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;

    /// Check whether any user already holds this email
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Insert a new user, returning the issued id
    async fn insert(&self, user: &NewUser) -> Result<RecordId, RepositoryError>;

    /// Set the role of one user
    async fn update_role(
        &self,
        id: &RecordId,
        role: UserRole,
    ) -> Result<UpdateOutcome, RepositoryError>;

    /// Remove a user, returning whether a record was deleted
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
