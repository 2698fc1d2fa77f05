//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so the router and the OpenAPI document
//! are built from the same handler annotations. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so they end up on the same
/// axum method router.
///
/// # Registered Endpoints
/// - `/api/category`, `/api/country`, `/api/owner`, `/api/pokemon`, `/api/review` and
///   `/api/reviewer`: list (GET) and create (POST)
/// - `/api/{resource}/{id}`: get (GET), update (PUT) and delete (DELETE)
/// - `GET /api/category/pokemon/{categoryId}` - Pokemon in a category
/// - `GET /api/country/{countryId}/owners` - Owners living in a country
/// - `GET /owners/{ownerId}` - Country of an owner
/// - `GET /api/owner/{ownerId}/pokemon` - Pokemon of an owner
/// - `GET /api/owner/pokemon/{pokeId}` - Owners of a pokemon
/// - `GET /api/pokemon/{pokeId}/rating` - Average review rating
/// - `GET /api/review/pokemon/{pokeId}` - Reviews of a pokemon
/// - `GET /api/reviewer/{reviewerId}/reviews` - Reviews written by a reviewer
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pokémon Review", description = "Pokémon Review API"), tags(
        (name = controller::category::CATEGORY_TAG, description = "Category API routes"),
        (name = controller::country::COUNTRY_TAG, description = "Country API routes"),
        (name = controller::owner::OWNER_TAG, description = "Owner API routes"),
        (name = controller::pokemon::POKEMON_TAG, description = "Pokemon API routes"),
        (name = controller::review::REVIEW_TAG, description = "Review API routes"),
        (name = controller::reviewer::REVIEWER_TAG, description = "Reviewer API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Category
        .routes(routes!(
            controller::category::get_categories,
            controller::category::create_category
        ))
        .routes(routes!(
            controller::category::get_category,
            controller::category::update_category,
            controller::category::delete_category
        ))
        .routes(routes!(controller::category::get_pokemon_by_category))
        // Country
        .routes(routes!(
            controller::country::get_countries,
            controller::country::create_country
        ))
        .routes(routes!(
            controller::country::get_country,
            controller::country::update_country,
            controller::country::delete_country
        ))
        .routes(routes!(controller::country::get_owners_of_country))
        .routes(routes!(controller::country::get_country_of_owner))
        // Owner
        .routes(routes!(
            controller::owner::get_owners,
            controller::owner::create_owner
        ))
        .routes(routes!(
            controller::owner::get_owner,
            controller::owner::update_owner,
            controller::owner::delete_owner
        ))
        .routes(routes!(controller::owner::get_pokemon_of_owner))
        .routes(routes!(controller::owner::get_owners_of_pokemon))
        // Pokemon
        .routes(routes!(
            controller::pokemon::get_pokemons,
            controller::pokemon::create_pokemon
        ))
        .routes(routes!(
            controller::pokemon::get_pokemon,
            controller::pokemon::update_pokemon,
            controller::pokemon::delete_pokemon
        ))
        .routes(routes!(controller::pokemon::get_pokemon_rating))
        // Review
        .routes(routes!(
            controller::review::get_reviews,
            controller::review::create_review
        ))
        .routes(routes!(
            controller::review::get_review,
            controller::review::update_review,
            controller::review::delete_review
        ))
        .routes(routes!(controller::review::get_reviews_of_pokemon))
        // Reviewer
        .routes(routes!(
            controller::reviewer::get_reviewers,
            controller::reviewer::create_reviewer
        ))
        .routes(routes!(
            controller::reviewer::get_reviewer,
            controller::reviewer::update_reviewer,
            controller::reviewer::delete_reviewer
        ))
        .routes(routes!(controller::reviewer::get_reviews_of_reviewer))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
