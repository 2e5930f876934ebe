//! List Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    /// Create a new ListUsersUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Record>, UseCaseError> {
        let users = self.user_repository.find_all().await?;
        tracing::debug!(count = users.len(), "Users fetched");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let use_case = ListUsersUseCase::new(Arc::new(repo));
        assert!(matches!(use_case.execute().await, Err(UseCaseError::Repository(_))));
    }
}
