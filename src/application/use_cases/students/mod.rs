//! Student Use Cases

mod list_students;

pub use list_students::ListStudentsUseCase;
