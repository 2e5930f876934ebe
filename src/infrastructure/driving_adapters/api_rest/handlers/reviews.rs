//! Review Handlers
//!
//! HTTP handlers for review submission and moderation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Serialize;
use validator::Validate;

use crate::domain::models::record::RecordId;
use crate::domain::models::review::NewReview;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateReviewDto, DeletedResponseDto, RecordResponseDto, UpdateReviewStatusDto,
    UpdatedResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Response to a submitted review
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedReviewResponse {
    message: &'static str,
    inserted_id: String,
    review: RecordResponseDto,
}

/// Create the router for review endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/:id", patch(update_review_status).delete(delete_review))
}

/// GET /reviews - Every review, whatever its status
#[axum::debug_handler]
async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponseDto>>, ApiError> {
    let reviews = state.list_reviews_use_case.execute().await?;
    Ok(Json(reviews.into_iter().map(RecordResponseDto::from).collect()))
}

/// POST /reviews - Submit a review, `Pending` unless a status is given
///
/// # Responses
///
/// * 201 Created - `{ message, insertedId, review }`
/// * 400 Bad Request - Unknown status
#[axum::debug_handler]
async fn create_review(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<CreatedReviewResponse>), ApiError> {
    dto.validate()?;

    let created = state
        .create_review_use_case
        .execute(NewReview::try_from(dto)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedReviewResponse {
            message: "Review added",
            inserted_id: created.id().to_string(),
            review: created.into(),
        }),
    ))
}

/// PATCH /reviews/:id - Approve or reject a review
///
/// # Responses
///
/// * 200 OK - Status changed
/// * 400 Bad Request - Status other than `Approved` or `Rejected`
/// * 404 Not Found - No such review, or it already has this status
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn update_review_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<UpdateReviewStatusDto>,
) -> Result<Json<UpdatedResponseDto>, ApiError> {
    dto.validate()?;
    let decision = dto.decision()?;
    let id: RecordId = id.parse()?;

    let outcome = state
        .update_review_status_use_case
        .execute(&id, decision)
        .await?;

    Ok(Json(UpdatedResponseDto::new(
        "Review status updated successfully",
        outcome,
    )))
}

/// DELETE /reviews/:id - Remove a review
///
/// # Responses
///
/// * 200 OK - Review removed
/// * 404 Not Found - No review with this id
/// * 500 Internal Server Error - Malformed id or database failure
#[axum::debug_handler]
async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponseDto>, ApiError> {
    let id: RecordId = id.parse()?;

    state.delete_review_use_case.execute(&id).await?;

    Ok(Json(DeletedResponseDto::new("Review deleted successfully")))
}
