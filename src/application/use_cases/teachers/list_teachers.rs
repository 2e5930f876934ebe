//! List Teachers Use Case

use std::sync::Arc;

use crate::domain::gateways::TeacherRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for listing all teachers
pub struct ListTeachersUseCase {
    teacher_repository: Arc<dyn TeacherRepository>,
}

impl ListTeachersUseCase {
    /// Create a new ListTeachersUseCase
    #[must_use]
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Record>, UseCaseError> {
        let teachers = self.teacher_repository.find_all().await?;
        tracing::debug!(count = teachers.len(), "Teachers fetched");
        Ok(teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::teacher_repository::MockTeacherRepository;

    #[tokio::test]
    async fn should_return_empty_list_when_collection_is_empty() {
        let mut repo = MockTeacherRepository::new();
        repo.expect_find_all().times(1).returning(|| Ok(vec![]));

        let use_case = ListTeachersUseCase::new(Arc::new(repo));
        let teachers = use_case.execute().await.unwrap();

        assert!(teachers.is_empty());
    }
}
