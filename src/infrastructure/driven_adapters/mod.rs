//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod repositories;

pub use config::AppConfig;
pub use repositories::{
    PostgresReviewRepository, PostgresStudentRepository, PostgresTeacherRepository,
    PostgresUserRepository,
};
