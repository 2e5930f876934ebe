//! Collection Repositories
//!
//! PostgreSQL-backed implementations of the repository gateways.

pub mod collection;
mod reviews;
mod students;
mod teachers;
mod users;

pub use collection::{Collection, DocumentCollection};
pub use reviews::PostgresReviewRepository;
pub use students::PostgresStudentRepository;
pub use teachers::PostgresTeacherRepository;
pub use users::PostgresUserRepository;
