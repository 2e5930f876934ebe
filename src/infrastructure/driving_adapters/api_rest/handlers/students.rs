//! Student Handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::RecordResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for student endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_students))
}

/// GET /student - Every student record
///
/// # Responses
///
/// * 200 OK - Array of student records
/// * 500 Internal Server Error - Database failure
#[axum::debug_handler]
async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponseDto>>, ApiError> {
    let students = state.list_students_use_case.execute().await?;
    Ok(Json(students.into_iter().map(RecordResponseDto::from).collect()))
}
