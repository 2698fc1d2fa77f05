use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, review::ReviewDto, reviewer::ReviewerDto},
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::reviewer::ReviewerService,
    },
};

pub static REVIEWER_TAG: &str = "reviewer";

/// Get all reviewers
#[utoipa::path(
    get,
    path = "/api/reviewer",
    tag = REVIEWER_TAG,
    responses(
        (status = 200, description = "Success when retrieving reviewers", body = Vec<ReviewerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    let reviewers = reviewer_service.get_reviewers().await?;

    Ok((StatusCode::OK, Json(reviewers)))
}

#[utoipa::path(
    get,
    path = "/api/reviewer/{reviewerId}",
    tag = REVIEWER_TAG,
    params(("reviewerId" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 200, description = "Success when retrieving reviewer", body = ReviewerDto),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewer(
    State(state): State<AppState>,
    Path(reviewer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    let reviewer = reviewer_service.get_reviewer(reviewer_id).await?;

    Ok((StatusCode::OK, Json(reviewer)))
}

/// Get all reviews written by a reviewer
#[utoipa::path(
    get,
    path = "/api/reviewer/{reviewerId}/reviews",
    tag = REVIEWER_TAG,
    params(("reviewerId" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 200, description = "Success when retrieving reviews of reviewer", body = Vec<ReviewDto>),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_of_reviewer(
    State(state): State<AppState>,
    Path(reviewer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    let reviews = reviewer_service.get_reviews_of_reviewer(reviewer_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

#[utoipa::path(
    post,
    path = "/api/reviewer",
    tag = REVIEWER_TAG,
    request_body = ReviewerDto,
    responses(
        (status = 204, description = "Reviewer created"),
        (status = 400, description = "Missing or invalid request body", body = ErrorDto),
        (status = 422, description = "Reviewer already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reviewer(
    State(state): State<AppState>,
    Payload(reviewer): Payload<ReviewerDto>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    reviewer_service.create_reviewer(reviewer).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/reviewer/{reviewerId}",
    tag = REVIEWER_TAG,
    params(("reviewerId" = i32, Path, description = "Reviewer ID, must match the body ID")),
    request_body = ReviewerDto,
    responses(
        (status = 204, description = "Reviewer updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reviewer(
    State(state): State<AppState>,
    Path(reviewer_id): Path<i32>,
    Payload(reviewer): Payload<ReviewerDto>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    reviewer_service
        .update_reviewer(reviewer_id, reviewer)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a reviewer and every review they wrote
#[utoipa::path(
    delete,
    path = "/api/reviewer/{reviewerId}",
    tag = REVIEWER_TAG,
    params(("reviewerId" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 204, description = "Reviewer and their reviews deleted"),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reviewer(
    State(state): State<AppState>,
    Path(reviewer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_service = ReviewerService::new(&state.db);

    reviewer_service.delete_reviewer(reviewer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
