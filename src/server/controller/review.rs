use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewParams, ReviewDto},
    },
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::review::ReviewService,
    },
};

pub static REVIEW_TAG: &str = "review";

/// Get all reviews
#[utoipa::path(
    get,
    path = "/api/review",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Success when retrieving reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    let reviews = review_service.get_reviews().await?;

    Ok((StatusCode::OK, Json(reviews)))
}

#[utoipa::path(
    get,
    path = "/api/review/{reviewId}",
    tag = REVIEW_TAG,
    params(("reviewId" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Success when retrieving review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    let review = review_service.get_review(review_id).await?;

    Ok((StatusCode::OK, Json(review)))
}

/// Get all reviews of a pokemon
///
/// An unknown pokemon has no reviews, so it yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/review/pokemon/{pokeId}",
    tag = REVIEW_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Success when retrieving reviews of pokemon", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_of_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    let reviews = review_service.get_reviews_of_pokemon(pokemon_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Create a review of `pokeId` written by `reviewerId`
#[utoipa::path(
    post,
    path = "/api/review",
    tag = REVIEW_TAG,
    params(CreateReviewParams),
    request_body = ReviewDto,
    responses(
        (status = 204, description = "Review created"),
        (status = 400, description = "Missing or invalid request body or query", body = ErrorDto),
        (status = 404, description = "Reviewer or pokemon not found", body = ErrorDto),
        (status = 422, description = "Review already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Query(params): Query<CreateReviewParams>,
    Payload(review): Payload<ReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    review_service
        .create_review(params.reviewer_id, params.pokemon_id, review)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/review/{reviewId}",
    tag = REVIEW_TAG,
    params(("reviewId" = i32, Path, description = "Review ID, must match the body ID")),
    request_body = ReviewDto,
    responses(
        (status = 204, description = "Review updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
    Payload(review): Payload<ReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    review_service.update_review(review_id, review).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/review/{reviewId}",
    tag = REVIEW_TAG,
    params(("reviewId" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review_service = ReviewService::new(&state.db);

    review_service.delete_review(review_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
