//! PostgreSQL Document Collection
//!
//! Stores each collection as a table of JSONB documents keyed by a
//! database-issued UUID, and offers the handful of document-store style
//! operations the repositories are built from.

use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::record::{without_id, Document, Record, RecordId, UpdateOutcome};
use crate::shared::errors::RepositoryError;

/// The collections backing the API, one table each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Students,
    Users,
    Teachers,
    Reviews,
}

impl Collection {
    /// Table holding this collection's documents
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Users => "users",
            Self::Teachers => "teachers",
            Self::Reviews => "reviews",
        }
    }
}

/// Database row representation for a collection table
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    document: Json<Document>,
}

impl From<DocumentRow> for Record {
    fn from(row: DocumentRow) -> Self {
        Record::restore(RecordId::from_uuid(row.id), row.document.0)
    }
}

/// Matched/modified counters produced by a field-set update
#[derive(Debug, sqlx::FromRow)]
struct UpdateCountsRow {
    matched_count: i64,
    modified_count: i64,
}

impl TryFrom<UpdateCountsRow> for UpdateOutcome {
    type Error = RepositoryError;

    fn try_from(row: UpdateCountsRow) -> Result<Self, Self::Error> {
        let matched = u64::try_from(row.matched_count)
            .map_err(|e| RepositoryError::Mapping(format!("Invalid matched count: {e}")))?;
        let modified = u64::try_from(row.modified_count)
            .map_err(|e| RepositoryError::Mapping(format!("Invalid modified count: {e}")))?;
        Ok(UpdateOutcome::new(matched, modified))
    }
}

/// Handle on one collection table
#[derive(Debug, Clone)]
pub struct DocumentCollection {
    pool: PgPool,
    collection: Collection,
}

impl DocumentCollection {
    #[must_use]
    pub fn new(pool: PgPool, collection: Collection) -> Self {
        Self { pool, collection }
    }

    fn table(&self) -> &'static str {
        self.collection.table()
    }

    /// Every document, in insertion order
    pub async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        let sql = format!(
            "SELECT id, document FROM {} ORDER BY created_at ASC, id ASC",
            self.table()
        );

        let rows = sqlx::query_as::<_, DocumentRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    /// Whether any document holds exactly `value` under the top-level key `field`
    pub async fn exists_with(&self, field: &str, value: &Value) -> Result<bool, RepositoryError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE document -> $1 = $2::jsonb)",
            self.table()
        );

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(field)
            .bind(Json(value))
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Insert one document and read it back with its issued id
    pub async fn insert_one(&self, document: Document) -> Result<Record, RepositoryError> {
        let sql = format!(
            "INSERT INTO {} (document) VALUES ($1::jsonb) RETURNING id, document",
            self.table()
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(Json(without_id(document)))
            .fetch_one(&self.pool)
            .await?;

        Ok(Record::from(row))
    }

    /// Merge `fields` into one document.
    ///
    /// A document that already holds every value counts as matched but not
    /// modified, and is left untouched.
    pub async fn set_fields(
        &self,
        id: &RecordId,
        fields: &Document,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let table = self.table();
        let sql = format!(
            r#"
            WITH matched AS (
                SELECT id FROM {table} WHERE id = $1
            ),
            modified AS (
                UPDATE {table}
                SET document = document || $2::jsonb,
                    updated_at = NOW()
                WHERE id = $1
                  AND document || $2::jsonb <> document
                RETURNING id
            )
            SELECT
                (SELECT COUNT(*) FROM matched) AS matched_count,
                (SELECT COUNT(*) FROM modified) AS modified_count
            "#
        );

        let row = sqlx::query_as::<_, UpdateCountsRow>(&sql)
            .bind(id.as_uuid())
            .bind(Json(fields))
            .fetch_one(&self.pool)
            .await?;

        UpdateOutcome::try_from(row)
    }

    /// Delete one document, returning whether it existed
    pub async fn delete_one(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table());

        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
