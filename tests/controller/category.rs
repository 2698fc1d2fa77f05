use pokemon_review::{
    model::{category::CategoryDto, pokemon::PokemonDto},
    server::controller::category::{
        create_category, delete_category, get_categories, get_category, get_pokemon_by_category,
        update_category,
    },
};

use super::*;

fn category_dto(id: i32, name: &str) -> CategoryDto {
    CategoryDto {
        id,
        name: name.to_string(),
    }
}

/// Expect 200 with every category ordered by ID
#[tokio::test]
async fn get_categories_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_category("Water")
        .build()
        .await?;

    let result = get_categories(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Vec<CategoryDto> = read_json(resp).await?;
    assert_eq!(
        categories,
        vec![category_dto(1, "Electric"), category_dto(2, "Water")]
    );

    Ok(())
}

/// Expect 404 for a category that does not exist
#[tokio::test]
async fn get_category_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_category(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with an empty list for an unknown category
#[tokio::test]
async fn get_pokemon_by_category_returns_empty_for_unknown_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_pokemon_by_category(State(test.into_app_state()), Path(42)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let pokemon: Vec<PokemonDto> = read_json(resp).await?;
    assert!(pokemon.is_empty());

    Ok(())
}

/// Expect 204 when creating a new category
#[tokio::test]
async fn create_category_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = create_category(
        State(test.into_app_state()),
        Payload(category_dto(0, "Electric")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 422 when a category with the same trimmed, case-insensitive name exists
#[tokio::test]
async fn create_category_rejects_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .build()
        .await?;

    let result = create_category(
        State(test.into_app_state()),
        Payload(category_dto(0, " ELECTRIC")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 400 when the body ID does not match the path ID
#[tokio::test]
async fn update_category_rejects_id_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .build()
        .await?;

    let result = update_category(
        State(test.into_app_state()),
        Path(1),
        Payload(category_dto(2, "Water")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 when deleting an existing category
#[tokio::test]
async fn delete_category_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .build()
        .await?;

    let result = delete_category(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 500 when required tables are missing
#[tokio::test]
async fn get_categories_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_categories(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
