//! User Handlers
//!
//! HTTP handlers for user CRUD operations and role changes.
//! Role changes are not authorized: any caller may promote or demote.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::record::RecordId;
use crate::domain::models::user::NewUser;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateUserDto, DeletedResponseDto, InsertedResponseDto, RecordResponseDto,
    UpdateUserRoleDto, UpdatedResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", delete(delete_user))
        .route("/role/:id", patch(update_user_role))
}

/// GET /users - Every user record
#[axum::debug_handler]
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponseDto>>, ApiError> {
    let users = state.list_users_use_case.execute().await?;
    Ok(Json(users.into_iter().map(RecordResponseDto::from).collect()))
}

/// POST /users - Create a user unless the email is taken
///
/// # Responses
///
/// * 201 Created - `{ message, insertedId }`
/// * 400 Bad Request - Missing name or email, or unknown role
/// * 409 Conflict - A user with this email already exists
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateUserDto>,
) -> Result<(StatusCode, Json<InsertedResponseDto>), ApiError> {
    dto.validate()?;

    let id = state
        .create_user_use_case
        .execute(NewUser::try_from(dto)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertedResponseDto::new("User created successfully.", &id)),
    ))
}

/// DELETE /users/:id - Remove a user
///
/// # Responses
///
/// * 200 OK - User removed
/// * 404 Not Found - No user with this id
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponseDto>, ApiError> {
    let id: RecordId = id.parse()?;

    state.delete_user_use_case.execute(&id).await?;

    Ok(Json(DeletedResponseDto::new("User deleted successfully")))
}

/// PATCH /users/role/:id - Set a user's role to `admin` or `user`
///
/// The role is checked before the id, so an invalid role never reaches the database.
///
/// # Responses
///
/// * 200 OK - Role changed
/// * 400 Bad Request - Role missing or not whitelisted
/// * 404 Not Found - No such user, or the user already has this role
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<UpdateUserRoleDto>,
) -> Result<Json<UpdatedResponseDto>, ApiError> {
    dto.validate()?;
    let role = dto.role()?;
    let id: RecordId = id.parse()?;

    let outcome = state.update_user_role_use_case.execute(&id, role).await?;

    Ok(Json(UpdatedResponseDto::new(
        "User role updated successfully",
        outcome,
    )))
}
