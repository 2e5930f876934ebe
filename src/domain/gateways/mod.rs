//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod review_repository;
pub mod student_repository;
pub mod teacher_repository;
pub mod user_repository;

pub use review_repository::ReviewRepository;
pub use student_repository::StudentRepository;
pub use teacher_repository::TeacherRepository;
pub use user_repository::UserRepository;
