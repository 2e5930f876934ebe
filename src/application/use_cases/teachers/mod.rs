//! Teacher Use Cases
//!
//! Teachers carry no uniqueness constraint; creation is unconditional.

mod create_teacher;
mod delete_teacher;
mod list_teachers;
mod update_teacher;

pub use create_teacher::CreateTeacherUseCase;
pub use delete_teacher::DeleteTeacherUseCase;
pub use list_teachers::ListTeachersUseCase;
pub use update_teacher::UpdateTeacherUseCase;
