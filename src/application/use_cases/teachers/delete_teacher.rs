//! Delete Teacher Use Case

use std::sync::Arc;

use crate::domain::gateways::TeacherRepository;
use crate::domain::models::record::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a teacher
pub struct DeleteTeacherUseCase {
    teacher_repository: Arc<dyn TeacherRepository>,
}

impl DeleteTeacherUseCase {
    /// Create a new DeleteTeacherUseCase
    #[must_use]
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no teacher has this id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(teacher_id = %id, "Deleting teacher");

        if !self.teacher_repository.delete(id).await? {
            tracing::warn!(teacher_id = %id, "Teacher not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Teacher",
                id: id.to_string(),
            });
        }

        tracing::info!(teacher_id = %id, "Teacher deleted successfully");
        Ok(())
    }
}
