//! PostgreSQL User Repository Implementation

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::collection::{Collection, DocumentCollection};
use crate::domain::gateways::UserRepository;
use crate::domain::models::record::{Document, Record, RecordId, UpdateOutcome};
use crate::domain::models::user::{NewUser, UserRole};
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    users: DocumentCollection,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: DocumentCollection::new(pool, Collection::Users),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        self.users.find_all().await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        self.users
            .exists_with("email", &Value::String(email.to_string()))
            .await
    }

    async fn insert(&self, user: &NewUser) -> Result<RecordId, RepositoryError> {
        let record = self.users.insert_one(user.to_document()).await?;
        Ok(*record.id())
    }

    async fn update_role(
        &self,
        id: &RecordId,
        role: UserRole,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let mut fields = Document::new();
        fields.insert("role".to_string(), Value::String(role.as_str().to_string()));
        self.users.set_fields(id, &fields).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        self.users.delete_one(id).await
    }
}
