//! List Students Use Case
//!
//! Returns every student record verbatim.

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for listing all students
pub struct ListStudentsUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl ListStudentsUseCase {
    /// Create a new ListStudentsUseCase
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Record>, UseCaseError> {
        tracing::debug!("Fetching all students");

        let students = self.student_repository.find_all().await?;

        tracing::debug!(count = students.len(), "Students fetched");
        Ok(students)
    }
}
