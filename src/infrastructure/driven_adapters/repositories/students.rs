//! PostgreSQL Student Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::collection::{Collection, DocumentCollection};
use crate::domain::gateways::StudentRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of StudentRepository
pub struct PostgresStudentRepository {
    students: DocumentCollection,
}

impl PostgresStudentRepository {
    /// Create a new PostgresStudentRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            students: DocumentCollection::new(pool, Collection::Students),
        }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        self.students.find_all().await
    }
}
