//! End-to-end tests sending HTTP requests through the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pokemon_review::{
    model::{owner::OwnerDto, pokemon::PokemonDto},
    server::router::routes,
};
use review_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{read_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Expect a created pokemon to be served back with its ISO birth date
#[tokio::test]
async fn create_then_get_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_category("Water")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/pokemon?ownerId=1&categoryId=2",
            r#"{"name":"Pikachu","birthDate":"1903-01-01"}"#,
        ))
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app(&test)
        .oneshot(get("/api/pokemon/1"))
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await?;
    assert_eq!(
        body,
        serde_json::json!({"id": 1, "name": "Pikachu", "birthDate": "1903-01-01"})
    );

    Ok(())
}

#[tokio::test]
async fn get_unknown_pokemon_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/pokemon/999"))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = read_json(resp).await?;
    assert!(body.get("error").is_some());

    Ok(())
}

/// Expect 400 when the body is JSON `null`
#[tokio::test]
async fn null_body_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/category", "null"))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when a required query parameter is missing
#[tokio::test]
async fn missing_query_parameter_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/pokemon?ownerId=1",
            r#"{"name":"Pikachu","birthDate":"1903-01-01"}"#,
        ))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the country lookup by owner to live outside the `/api` prefix
#[tokio::test]
async fn get_country_of_owner_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(get("/owners/1"))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await?;
    assert_eq!(body, serde_json::json!({"id": 1, "name": "Kanto"}));

    Ok(())
}

/// Expect the static `pokemon` segment to win over the owner ID segment
#[tokio::test]
async fn owner_routes_do_not_collide() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, owner, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let resp = app(&test)
        .oneshot(get(&format!("/api/owner/pokemon/{}", pokemon.id)))
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let owners: Vec<OwnerDto> = read_json(resp).await?;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].id, owner.id);

    let resp = app(&test)
        .oneshot(get(&format!("/api/owner/{}/pokemon", owner.id)))
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let owned: Vec<PokemonDto> = read_json(resp).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, pokemon.id);

    Ok(())
}

#[tokio::test]
async fn pokemon_rating_route() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_reviewer("Teddy", "Smith").await?;
    test.review()
        .insert_reviews_with_ratings(pokemon.id, reviewer.id, &[5, 5, 1])
        .await?;

    let resp = app(&test)
        .oneshot(get(&format!("/api/pokemon/{}/rating", pokemon.id)))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let rating: f64 = read_json(resp).await?;
    assert!((rating - 3.6667).abs() < 1e-3);

    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(resp).await?;
    assert!(doc["paths"].get("/api/pokemon/{pokeId}/rating").is_some());
    assert!(doc["paths"].get("/owners/{ownerId}").is_some());

    Ok(())
}
