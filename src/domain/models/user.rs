//! User Domain Model
//!
//! Users are unique by email and carry a role from a fixed whitelist.

use std::str::FromStr;

use serde_json::Value;

use crate::domain::models::record::{without_id, Document};
use crate::shared::errors::DomainError;

/// Role a user may hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    /// Exact, case-sensitive match
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

/// Data required to create a new User
///
/// Anything beyond name, email and role is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    name: String,
    email: String,
    role: UserRole,
    extra: Document,
}

impl NewUser {
    /// Create new user data, rejecting an empty name or email
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` when `name` or `email` is empty.
    pub fn new(
        name: String,
        email: String,
        role: UserRole,
        extra: Document,
    ) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(DomainError::MissingField("email"));
        }

        Ok(Self {
            name,
            email,
            role,
            extra: without_id(extra),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Document to be stored for this user
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = self.extra.clone();
        document.insert("name".to_string(), Value::String(self.name.clone()));
        document.insert("email".to_string(), Value::String(self.email.clone()));
        document.insert("role".to_string(), Value::String(self.role.as_str().to_string()));
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
        assert!("Admin".parse::<UserRole>().is_err());
        assert!("superuser".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_new_user_requires_name_and_email() {
        assert_eq!(
            NewUser::new(String::new(), "a@x.com".into(), UserRole::User, Document::new()),
            Err(DomainError::MissingField("name"))
        );
        assert_eq!(
            NewUser::new("A".into(), String::new(), UserRole::User, Document::new()),
            Err(DomainError::MissingField("email"))
        );
    }

    #[test]
    fn test_to_document_keeps_extra_fields() {
        let mut extra = Document::new();
        extra.insert("photo".into(), json!("https://img/a.png"));
        extra.insert("_id".into(), json!("client-chosen"));

        let user = NewUser::new("A".into(), "a@x.com".into(), UserRole::Admin, extra).unwrap();
        let document = user.to_document();

        assert_eq!(document.get("name"), Some(&json!("A")));
        assert_eq!(document.get("email"), Some(&json!("a@x.com")));
        assert_eq!(document.get("role"), Some(&json!("admin")));
        assert_eq!(document.get("photo"), Some(&json!("https://img/a.png")));
        assert!(document.get("_id").is_none());
    }
}
