use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, country::CountryDto, owner::OwnerDto},
    server::{
        controller::util::payload::Payload, error::Error, model::app::AppState,
        service::country::CountryService,
    },
};

pub static COUNTRY_TAG: &str = "country";

/// Get all countries
#[utoipa::path(
    get,
    path = "/api/country",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Success when retrieving countries", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let countries = country_service.get_countries().await?;

    Ok((StatusCode::OK, Json(countries)))
}

#[utoipa::path(
    get,
    path = "/api/country/{countryId}",
    tag = COUNTRY_TAG,
    params(("countryId" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Success when retrieving country", body = CountryDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.get_country(country_id).await?;

    Ok((StatusCode::OK, Json(country)))
}

/// Get the country an owner lives in
///
/// Served outside the `/api` prefix for compatibility with existing clients.
#[utoipa::path(
    get,
    path = "/owners/{ownerId}",
    tag = COUNTRY_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Success when retrieving the owner's country", body = CountryDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_of_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.get_country_of_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(country)))
}

/// Get all owners living in a country
#[utoipa::path(
    get,
    path = "/api/country/{countryId}/owners",
    tag = COUNTRY_TAG,
    params(("countryId" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Success when retrieving owners of country", body = Vec<OwnerDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_of_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let owners = country_service.get_owners_of_country(country_id).await?;

    Ok((StatusCode::OK, Json(owners)))
}

#[utoipa::path(
    post,
    path = "/api/country",
    tag = COUNTRY_TAG,
    request_body = CountryDto,
    responses(
        (status = 204, description = "Country created"),
        (status = 400, description = "Missing or invalid request body", body = ErrorDto),
        (status = 422, description = "Country already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    Payload(country): Payload<CountryDto>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    country_service.create_country(country).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/country/{countryId}",
    tag = COUNTRY_TAG,
    params(("countryId" = i32, Path, description = "Country ID, must match the body ID")),
    request_body = CountryDto,
    responses(
        (status = 204, description = "Country updated"),
        (status = 400, description = "Invalid request body or mismatched ID", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
    Payload(country): Payload<CountryDto>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    country_service.update_country(country_id, country).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a country
///
/// Fails with 500 while owners still live in the country.
#[utoipa::path(
    delete,
    path = "/api/country/{countryId}",
    tag = COUNTRY_TAG,
    params(("countryId" = i32, Path, description = "Country ID")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    country_service.delete_country(country_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
