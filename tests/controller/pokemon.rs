use pokemon_review::{
    model::pokemon::{CreatePokemonParams, PokemonDto},
    server::controller::pokemon::{
        create_pokemon, delete_pokemon, get_pokemon, get_pokemon_rating, get_pokemons,
        update_pokemon,
    },
};

use super::*;

fn pokemon_dto(id: i32, name: &str) -> PokemonDto {
    PokemonDto {
        id,
        name: name.to_string(),
        birth_date: factory::mock_birth_date(),
    }
}

/// Expect 204 and the pokemon linked to its owner and category
#[tokio::test]
async fn create_pokemon_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_category("Water")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .build()
        .await?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Query(CreatePokemonParams {
            owner_id: 1,
            category_id: 2,
        }),
        Payload(pokemon_dto(0, "Squirtle")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let owner_links = test.pokemon().get_owner_links(1).await?;
    let category_links = test.pokemon().get_category_links(1).await?;
    assert_eq!(owner_links.len(), 1);
    assert_eq!(owner_links[0].owner_id, 1);
    assert_eq!(category_links.len(), 1);
    assert_eq!(category_links[0].category_id, 2);

    Ok(())
}

/// Expect 404 when the owner in the query does not exist
#[tokio::test]
async fn create_pokemon_returns_not_found_for_unknown_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .build()
        .await?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Query(CreatePokemonParams {
            owner_id: 1,
            category_id: 1,
        }),
        Payload(pokemon_dto(0, "Pikachu")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 when a pokemon with the same trimmed, case-insensitive name exists
#[tokio::test]
async fn create_pokemon_rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (_, owner, category) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Query(CreatePokemonParams {
            owner_id: owner.id,
            category_id: category.id,
        }),
        Payload(pokemon_dto(0, " pikachu ")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn get_pokemons_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    test.pokemon().insert_mock_pokemon("Pikachu").await?;
    test.pokemon().insert_mock_pokemon("Bulbasaur").await?;

    let result = get_pokemons(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let pokemon: Vec<PokemonDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(
        pokemon,
        vec![pokemon_dto(1, "Pikachu"), pokemon_dto(2, "Bulbasaur")]
    );

    Ok(())
}

#[tokio::test]
async fn get_pokemon_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_pokemon(State(test.into_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the mean of all review ratings
#[tokio::test]
async fn get_pokemon_rating_returns_mean() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_reviewer("Teddy", "Smith").await?;
    test.review()
        .insert_reviews_with_ratings(pokemon.id, reviewer.id, &[5, 5, 1])
        .await?;

    let result = get_pokemon_rating(State(test.into_app_state()), Path(pokemon.id)).await;

    assert!(result.is_ok());
    let rating: f64 = read_json(result.unwrap().into_response()).await?;
    assert!((rating - 11.0 / 3.0).abs() < 1e-9);

    Ok(())
}

/// Expect 0 for a pokemon nobody reviewed
#[tokio::test]
async fn get_pokemon_rating_returns_zero_without_reviews() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = get_pokemon_rating(State(test.into_app_state()), Path(pokemon.id)).await;

    assert!(result.is_ok());
    let rating: f64 = read_json(result.unwrap().into_response()).await?;
    assert_eq!(rating, 0.0);

    Ok(())
}

/// Expect 400 when the path ID and body ID differ
#[tokio::test]
async fn update_pokemon_rejects_id_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = update_pokemon(
        State(test.into_app_state()),
        Path(1),
        Payload(pokemon_dto(2, "Raichu")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 and every review of the pokemon gone
#[tokio::test]
async fn delete_pokemon_removes_reviews() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_reviewer("Teddy", "Smith").await?;
    test.review()
        .insert_reviews_with_ratings(pokemon.id, reviewer.id, &[4, 2])
        .await?;

    let result = delete_pokemon(State(test.into_app_state()), Path(pokemon.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.review().count_reviews_of_pokemon(pokemon.id).await?, 0);

    Ok(())
}
