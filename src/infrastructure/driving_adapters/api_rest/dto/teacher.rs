//! Teacher DTOs

use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::teacher::TeacherProfile;

/// DTO for overwriting a teacher's profile (PATCH)
///
/// Omitted attributes are still written, as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherDto {
    pub name: Option<Value>,
    pub department: Option<Value>,
    pub subject: Option<Value>,
    pub photo: Option<Value>,
}

impl From<UpdateTeacherDto> for TeacherProfile {
    fn from(dto: UpdateTeacherDto) -> Self {
        Self {
            name: dto.name,
            department: dto.department,
            subject: dto.subject,
            photo: dto.photo,
        }
    }
}
