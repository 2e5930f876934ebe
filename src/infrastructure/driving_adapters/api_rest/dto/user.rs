//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::record::Document;
use crate::domain::models::user::{NewUser, UserRole};
use crate::shared::errors::DomainError;

const INVALID_ROLE: &str = "Invalid role specified";

/// Validates that a role is one of the whitelisted values
fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    role.parse::<UserRole>().map(|_| ()).map_err(|_| {
        let mut error = validator::ValidationError::new("role");
        error.message = Some(INVALID_ROLE.into());
        error
    })
}

/// DTO for creating a new user
///
/// Fields other than name, email and role are kept as part of the record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(
        required(message = "Name and email are required."),
        length(min = 1, message = "Name and email are required.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Name and email are required."),
        length(min = 1, message = "Name and email are required.")
    )]
    pub email: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

impl TryFrom<CreateUserDto> for NewUser {
    type Error = DomainError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let role = dto
            .role
            .as_deref()
            .map(str::parse::<UserRole>)
            .transpose()?
            .unwrap_or_default();

        NewUser::new(
            dto.name.unwrap_or_default(),
            dto.email.unwrap_or_default(),
            role,
            dto.extra,
        )
    }
}

/// DTO for changing a user's role
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRoleDto {
    #[validate(
        required(message = "Invalid role specified"),
        custom(function = "validate_role")
    )]
    pub role: Option<String>,
}

impl UpdateUserRoleDto {
    /// The requested role
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` for a missing or non-whitelisted role.
    pub fn role(&self) -> Result<UserRole, DomainError> {
        self.role.as_deref().unwrap_or_default().parse()
    }
}
