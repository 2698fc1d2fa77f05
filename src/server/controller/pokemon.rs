use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pokemon::{CreatePokemonParams, PokemonDto},
    },
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::pokemon::PokemonService,
    },
};

pub static POKEMON_TAG: &str = "pokemon";

/// Get all pokemon ordered by ID
#[utoipa::path(
    get,
    path = "/api/pokemon",
    tag = POKEMON_TAG,
    responses(
        (status = 200, description = "Success when retrieving pokemon", body = Vec<PokemonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.get_pokemons().await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

#[utoipa::path(
    get,
    path = "/api/pokemon/{pokeId}",
    tag = POKEMON_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Success when retrieving pokemon", body = PokemonDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.get_pokemon(pokemon_id).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Get the average review rating of a pokemon
///
/// Returns `0` for a pokemon without reviews.
#[utoipa::path(
    get,
    path = "/api/pokemon/{pokeId}/rating",
    tag = POKEMON_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Success when calculating rating", body = f64),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_rating(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let rating = pokemon_service.get_pokemon_rating(pokemon_id).await?;

    Ok((StatusCode::OK, Json(rating)))
}

/// Create a pokemon owned by `ownerId` in category `categoryId`
#[utoipa::path(
    post,
    path = "/api/pokemon",
    tag = POKEMON_TAG,
    params(CreatePokemonParams),
    request_body = PokemonDto,
    responses(
        (status = 204, description = "Pokemon created"),
        (status = 400, description = "Missing or invalid request body or query", body = ErrorDto),
        (status = 404, description = "Owner or category not found", body = ErrorDto),
        (status = 422, description = "Pokemon already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    Query(params): Query<CreatePokemonParams>,
    Payload(pokemon): Payload<PokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    pokemon_service
        .create_pokemon(params.owner_id, params.category_id, pokemon)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update a pokemon's name and birth date
#[utoipa::path(
    put,
    path = "/api/pokemon/{pokeId}",
    tag = POKEMON_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID, must match the body ID")),
    request_body = PokemonDto,
    responses(
        (status = 204, description = "Pokemon updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
    Payload(pokemon): Payload<PokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    pokemon_service.update_pokemon(pokemon_id, pokemon).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a pokemon and every review of it
#[utoipa::path(
    delete,
    path = "/api/pokemon/{pokeId}",
    tag = POKEMON_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 204, description = "Pokemon and its reviews deleted"),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    pokemon_service.delete_pokemon(pokemon_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
