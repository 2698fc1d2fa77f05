use pokemon_review::{
    model::{
        owner::{CreateOwnerParams, OwnerDto},
        pokemon::PokemonDto,
    },
    server::controller::owner::{
        create_owner, delete_owner, get_owner, get_owners, get_owners_of_pokemon,
        get_pokemon_of_owner, update_owner,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn owner_dto(id: i32, first_name: &str, last_name: &str) -> OwnerDto {
    OwnerDto {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Expect 204 and the owner to be stored in the requested country
#[tokio::test]
async fn create_owner_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_country("Kanto")
        .build()
        .await?;

    let result = create_owner(
        State(test.into_app_state()),
        Query(CreateOwnerParams { country_id: 1 }),
        Payload(owner_dto(0, "Ash", "Ketchum")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let owner = get_owner(State(test.into_app_state()), Path(1)).await;
    let owner: OwnerDto = read_json(owner.unwrap().into_response()).await?;
    assert_eq!(owner, owner_dto(1, "Ash", "Ketchum"));

    Ok(())
}

/// Expect 404 when the country in the query does not exist
#[tokio::test]
async fn create_owner_returns_not_found_for_unknown_country() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = create_owner(
        State(test.into_app_state()),
        Query(CreateOwnerParams { country_id: 1 }),
        Payload(owner_dto(0, "Ash", "Ketchum")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 when the last name is already taken
#[tokio::test]
async fn create_owner_rejects_duplicate_last_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .build()
        .await?;

    let result = create_owner(
        State(test.into_app_state()),
        Query(CreateOwnerParams { country_id: 1 }),
        Payload(owner_dto(0, "Delia", "Ketchum")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 200 with the owner's pokemon
#[tokio::test]
async fn get_pokemon_of_owner_returns_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, owner, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = get_pokemon_of_owner(State(test.into_app_state()), Path(owner.id)).await;

    assert!(result.is_ok());
    let owned: Vec<PokemonDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, pokemon.id);

    Ok(())
}

/// Expect 404 for an owner that does not exist
#[tokio::test]
async fn get_pokemon_of_owner_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_pokemon_of_owner(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn get_owners_of_pokemon_returns_owners() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, owner, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = get_owners_of_pokemon(State(test.into_app_state()), Path(pokemon.id)).await;

    assert!(result.is_ok());
    let owners: Vec<OwnerDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(owners, vec![OwnerDto::from(owner)]);

    Ok(())
}

#[tokio::test]
async fn get_owners_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_owner("Gary", "Oak", 1)
        .build()
        .await?;

    let result = get_owners(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let owners: Vec<OwnerDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(owners.len(), 2);

    Ok(())
}

/// Expect 204 on update and the country link to stay
#[tokio::test]
async fn update_owner_keeps_country() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .build()
        .await?;

    let result = update_owner(
        State(test.into_app_state()),
        Path(1),
        Payload(owner_dto(1, "Satoshi", "Ketchum")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let owner = entity::prelude::Owner::find_by_id(1).one(&test.db).await?;
    assert!(matches!(owner, Some(o) if o.first_name == "Satoshi" && o.country_id == 1));

    Ok(())
}

#[tokio::test]
async fn delete_owner_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = delete_owner(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
