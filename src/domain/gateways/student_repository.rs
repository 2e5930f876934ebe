//! Student Repository Gateway

use async_trait::async_trait;

use crate::domain::models::record::Record;
use crate::shared::errors::RepositoryError;

/// Read-only access to the student collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every student record, in insertion order
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;
}
