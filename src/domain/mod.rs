//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ReviewRepository, StudentRepository, TeacherRepository, UserRepository};
pub use models::{
    Document, NewReview, NewUser, Record, RecordId, ReviewDecision, ReviewStatus, TeacherProfile,
    UpdateOutcome, UserRole,
};
