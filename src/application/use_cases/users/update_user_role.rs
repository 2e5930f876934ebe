//! Update User Role Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record::{RecordId, UpdateOutcome};
use crate::domain::models::user::UserRole;
use crate::shared::errors::UseCaseError;

/// Use case for changing a user's role
pub struct UpdateUserRoleUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl UpdateUserRoleUseCase {
    /// Create a new UpdateUserRoleUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFoundOrUnchanged` if no user has this id, or the
    /// user already holds `role`; the two cases are not told apart.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &RecordId,
        role: UserRole,
    ) -> Result<UpdateOutcome, UseCaseError> {
        tracing::info!(user_id = %id, role = %role, "Updating user role");

        let outcome = self.user_repository.update_role(id, role).await?;

        if !outcome.is_modified() {
            tracing::warn!(
                user_id = %id,
                matched = outcome.matched,
                "User not found or role unchanged"
            );
            return Err(UseCaseError::NotFoundOrUnchanged {
                resource: "User",
                field: "role",
                id: id.to_string(),
            });
        }

        tracing::info!(user_id = %id, role = %role, "User role updated successfully");
        Ok(outcome)
    }
}
