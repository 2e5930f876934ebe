//! Create User Use Case
//!
//! Inserts a user only if no existing user holds the same email.
//! The check and the insert are separate round trips, so two concurrent
//! requests for the same email can both pass the check.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record::RecordId;
use crate::domain::models::user::NewUser;
use crate::shared::errors::UseCaseError;

/// Use case for creating a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Create a new CreateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a user with the same email already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user: NewUser) -> Result<RecordId, UseCaseError> {
        tracing::info!(email = %user.email(), role = %user.role(), "Creating new user");

        if self.user_repository.exists_by_email(user.email()).await? {
            tracing::warn!(email = %user.email(), "User with email already exists");
            return Err(UseCaseError::Conflict("User already exists.".to_string()));
        }

        let id = self.user_repository.insert(&user).await?;

        tracing::info!(user_id = %id, email = %user.email(), "User created successfully");
        Ok(id)
    }
}
