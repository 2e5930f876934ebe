//! Teacher Handlers
//!
//! HTTP handlers for teacher CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use crate::domain::models::record::{Document, RecordId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    DeletedResponseDto, InsertedResponseDto, RecordResponseDto, UpdateResultDto,
    UpdateTeacherDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for teacher endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route("/:id", patch(update_teacher).delete(delete_teacher))
}

/// GET /teachers - Every teacher record
#[axum::debug_handler]
async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponseDto>>, ApiError> {
    let teachers = state.list_teachers_use_case.execute().await?;
    Ok(Json(teachers.into_iter().map(RecordResponseDto::from).collect()))
}

/// POST /teachers - Store a teacher; any JSON object is accepted
///
/// # Responses
///
/// * 201 Created - `{ message, insertedId }`
/// * 400 Bad Request - Body is not a JSON object
#[axum::debug_handler]
async fn create_teacher(
    State(state): State<AppState>,
    ApiJson(document): ApiJson<Document>,
) -> Result<(StatusCode, Json<InsertedResponseDto>), ApiError> {
    let id = state.create_teacher_use_case.execute(document).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertedResponseDto::new("Teacher created successfully.", &id)),
    ))
}

/// PATCH /teachers/:id - Overwrite name, department, subject and photo
///
/// # Responses
///
/// * 200 OK - Raw update counters, including when nothing matched
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<UpdateTeacherDto>,
) -> Result<Json<UpdateResultDto>, ApiError> {
    let id: RecordId = id.parse()?;

    let outcome = state
        .update_teacher_use_case
        .execute(&id, dto.into())
        .await?;

    Ok(Json(outcome.into()))
}

/// DELETE /teachers/:id - Remove a teacher
///
/// # Responses
///
/// * 200 OK - Teacher removed
/// * 404 Not Found - No teacher with this id
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponseDto>, ApiError> {
    let id: RecordId = id.parse()?;

    state.delete_teacher_use_case.execute(&id).await?;

    Ok(Json(DeletedResponseDto::new("Teacher deleted successfully")))
}
