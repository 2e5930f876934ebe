//! Delete User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a user
pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    /// Create a new DeleteUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no user has this id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %id, "Deleting user");

        if !self.user_repository.delete(id).await? {
            tracing::warn!(user_id = %id, "User not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "User",
                id: id.to_string(),
            });
        }

        tracing::info!(user_id = %id, "User deleted successfully");
        Ok(())
    }
}
