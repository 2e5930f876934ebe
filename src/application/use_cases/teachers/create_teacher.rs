//! Create Teacher Use Case
//!
//! Inserts the submitted body as-is; no field is required.

use std::sync::Arc;

use crate::domain::gateways::TeacherRepository;
use crate::domain::models::record::{without_id, Document, RecordId};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new teacher
pub struct CreateTeacherUseCase {
    teacher_repository: Arc<dyn TeacherRepository>,
}

impl CreateTeacherUseCase {
    /// Create a new CreateTeacherUseCase
    #[must_use]
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, document: Document) -> Result<RecordId, UseCaseError> {
        tracing::info!(fields = document.len(), "Creating new teacher");

        let id = self.teacher_repository.insert(without_id(document)).await?;

        tracing::info!(teacher_id = %id, "Teacher created successfully");
        Ok(id)
    }
}
