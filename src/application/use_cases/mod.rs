//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod reviews;
pub mod students;
pub mod teachers;
pub mod users;

pub use reviews::{
    CreateReviewUseCase, DeleteReviewUseCase, ListReviewsUseCase, UpdateReviewStatusUseCase,
};
pub use students::ListStudentsUseCase;
pub use teachers::{
    CreateTeacherUseCase, DeleteTeacherUseCase, ListTeachersUseCase, UpdateTeacherUseCase,
};
pub use users::{CreateUserUseCase, DeleteUserUseCase, ListUsersUseCase, UpdateUserRoleUseCase};
