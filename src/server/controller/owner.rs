use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        owner::{CreateOwnerParams, OwnerDto},
        pokemon::PokemonDto,
    },
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::owner::OwnerService,
    },
};

pub static OWNER_TAG: &str = "owner";

/// Get all owners
#[utoipa::path(
    get,
    path = "/api/owner",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Success when retrieving owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let owners = owner_service.get_owners().await?;

    Ok((StatusCode::OK, Json(owners)))
}

#[utoipa::path(
    get,
    path = "/api/owner/{ownerId}",
    tag = OWNER_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Success when retrieving owner", body = OwnerDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service.get_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(owner)))
}

/// Get all pokemon of an owner
#[utoipa::path(
    get,
    path = "/api/owner/{ownerId}/pokemon",
    tag = OWNER_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Success when retrieving pokemon of owner", body = Vec<PokemonDto>),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_of_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let pokemon = owner_service.get_pokemon_of_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Get all owners of a pokemon
#[utoipa::path(
    get,
    path = "/api/owner/pokemon/{pokeId}",
    tag = OWNER_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Success when retrieving owners of pokemon", body = Vec<OwnerDto>),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_of_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let owners = owner_service.get_owners_of_pokemon(pokemon_id).await?;

    Ok((StatusCode::OK, Json(owners)))
}

/// Create an owner living in the country given by `countryId`
#[utoipa::path(
    post,
    path = "/api/owner",
    tag = OWNER_TAG,
    params(CreateOwnerParams),
    request_body = OwnerDto,
    responses(
        (status = 204, description = "Owner created"),
        (status = 400, description = "Missing or invalid request body or query", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 422, description = "Owner already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    Query(params): Query<CreateOwnerParams>,
    Payload(owner): Payload<OwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    owner_service.create_owner(params.country_id, owner).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update an owner's name, the country it lives in is kept
#[utoipa::path(
    put,
    path = "/api/owner/{ownerId}",
    tag = OWNER_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID, must match the body ID")),
    request_body = OwnerDto,
    responses(
        (status = 204, description = "Owner updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
    Payload(owner): Payload<OwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    owner_service.update_owner(owner_id, owner).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/owner/{ownerId}",
    tag = OWNER_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    owner_service.delete_owner(owner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
