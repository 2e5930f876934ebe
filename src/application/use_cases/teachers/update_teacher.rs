//! Update Teacher Use Case
//!
//! Overwrites the teacher profile fields and reports the raw update outcome.
//! A miss is not an error here: the caller receives the zero counters.

use std::sync::Arc;

use crate::domain::gateways::TeacherRepository;
use crate::domain::models::record::{RecordId, UpdateOutcome};
use crate::domain::models::teacher::TeacherProfile;
use crate::shared::errors::UseCaseError;

/// Use case for overwriting a teacher's profile
pub struct UpdateTeacherUseCase {
    teacher_repository: Arc<dyn TeacherRepository>,
}

impl UpdateTeacherUseCase {
    /// Create a new UpdateTeacherUseCase
    #[must_use]
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &RecordId,
        profile: TeacherProfile,
    ) -> Result<UpdateOutcome, UseCaseError> {
        tracing::info!(teacher_id = %id, "Updating teacher profile");

        let outcome = self.teacher_repository.update_profile(id, &profile).await?;

        tracing::info!(
            teacher_id = %id,
            matched = outcome.matched,
            modified = outcome.modified,
            "Teacher profile update applied"
        );
        Ok(outcome)
    }
}
