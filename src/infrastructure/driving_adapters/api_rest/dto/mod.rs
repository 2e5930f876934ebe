//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod record;
pub mod review;
pub mod teacher;
pub mod user;

pub use record::{
    DeletedResponseDto, InsertedResponseDto, RecordResponseDto, UpdateResultDto,
    UpdatedResponseDto,
};
pub use review::{CreateReviewDto, UpdateReviewStatusDto};
pub use teacher::UpdateTeacherDto;
pub use user::{CreateUserDto, UpdateUserRoleDto};
