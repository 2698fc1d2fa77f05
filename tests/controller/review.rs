use pokemon_review::{
    model::review::{CreateReviewParams, ReviewDto},
    server::controller::review::{
        create_review, delete_review, get_review, get_reviews, get_reviews_of_pokemon,
        update_review,
    },
};

use super::*;

fn review_dto(id: i32, title: &str, rating: i32) -> ReviewDto {
    ReviewDto {
        id,
        title: title.to_string(),
        text: format!("{} review text", title),
        rating,
    }
}

/// Expect 204 and the review to belong to the pokemon from the query
#[tokio::test]
async fn create_review_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_reviewer("Teddy", "Smith").await?;

    let result = create_review(
        State(test.into_app_state()),
        Query(CreateReviewParams {
            reviewer_id: reviewer.id,
            pokemon_id: pokemon.id,
        }),
        Payload(review_dto(0, "Electrifying", 5)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.review().count_reviews_of_pokemon(pokemon.id).await?, 1);

    Ok(())
}

/// Expect 404 when the reviewer does not exist
#[tokio::test]
async fn create_review_returns_not_found_for_unknown_reviewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;
    let (pokemon, _, _) = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let result = create_review(
        State(test.into_app_state()),
        Query(CreateReviewParams {
            reviewer_id: 1,
            pokemon_id: pokemon.id,
        }),
        Payload(review_dto(0, "Electrifying", 5)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 for a title another review already uses
#[tokio::test]
async fn create_review_rejects_duplicate_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_pokemon("Pikachu", factory::mock_birth_date(), 1, 1)
        .with_reviewer("Teddy", "Smith")
        .with_review("Electrifying", 5, 1, 1)
        .build()
        .await?;

    let result = create_review(
        State(test.into_app_state()),
        Query(CreateReviewParams {
            reviewer_id: 1,
            pokemon_id: 1,
        }),
        Payload(review_dto(0, "ELECTRIFYING", 4)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn get_reviews_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_pokemon("Pikachu", factory::mock_birth_date(), 1, 1)
        .with_reviewer("Teddy", "Smith")
        .with_review("Electrifying", 5, 1, 1)
        .with_review("Shocking", 3, 1, 1)
        .build()
        .await?;

    let result = get_reviews(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let reviews: Vec<ReviewDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(
        reviews,
        vec![review_dto(1, "Electrifying", 5), review_dto(2, "Shocking", 3)]
    );

    Ok(())
}

#[tokio::test]
async fn get_review_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_review(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with an empty list for an unknown pokemon
#[tokio::test]
async fn get_reviews_of_pokemon_returns_empty_for_unknown_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_reviews_of_pokemon(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let reviews: Vec<ReviewDto> = read_json(result.unwrap().into_response()).await?;
    assert!(reviews.is_empty());

    Ok(())
}

/// Expect 204 and the new rating stored
#[tokio::test]
async fn update_review_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_pokemon("Pikachu", factory::mock_birth_date(), 1, 1)
        .with_reviewer("Teddy", "Smith")
        .with_review("Electrifying", 5, 1, 1)
        .build()
        .await?;

    let result = update_review(
        State(test.into_app_state()),
        Path(1),
        Payload(review_dto(1, "Electrifying", 2)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let review = get_review(State(test.into_app_state()), Path(1)).await;
    let review: ReviewDto = read_json(review.unwrap().into_response()).await?;
    assert_eq!(review.rating, 2);

    Ok(())
}

#[tokio::test]
async fn delete_review_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = delete_review(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
