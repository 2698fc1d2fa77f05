use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, category::CategoryDto, pokemon::PokemonDto},
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::category::CategoryService,
    },
};

pub static CATEGORY_TAG: &str = "category";

/// Get all categories
#[utoipa::path(
    get,
    path = "/api/category",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Success when retrieving categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    let categories = category_service.get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/category/{categoryId}",
    tag = CATEGORY_TAG,
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Success when retrieving category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    let category = category_service.get_category(category_id).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Get all pokemon in a category
///
/// An unknown category has no pokemon, so it yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/category/pokemon/{categoryId}",
    tag = CATEGORY_TAG,
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Success when retrieving pokemon of category", body = Vec<PokemonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    let pokemon = category_service
        .get_pokemon_by_category(category_id)
        .await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

#[utoipa::path(
    post,
    path = "/api/category",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 204, description = "Category created"),
        (status = 400, description = "Missing or invalid request body", body = ErrorDto),
        (status = 422, description = "Category already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Payload(category): Payload<CategoryDto>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    category_service.create_category(category).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/category/{categoryId}",
    tag = CATEGORY_TAG,
    params(("categoryId" = i32, Path, description = "Category ID, must match the body ID")),
    request_body = CategoryDto,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Payload(category): Payload<CategoryDto>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    category_service
        .update_category(category_id, category)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/category/{categoryId}",
    tag = CATEGORY_TAG,
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    category_service.delete_category(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
