use pokemon_review::{
    model::{review::ReviewDto, reviewer::ReviewerDto},
    server::controller::reviewer::{
        create_reviewer, delete_reviewer, get_reviewer, get_reviewers, get_reviews_of_reviewer,
        update_reviewer,
    },
};

use super::*;

fn reviewer_dto(id: i32, first_name: &str, last_name: &str) -> ReviewerDto {
    ReviewerDto {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

#[tokio::test]
async fn create_reviewer_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = create_reviewer(
        State(test.into_app_state()),
        Payload(reviewer_dto(0, "Teddy", "Smith")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let reviewers = get_reviewers(State(test.into_app_state())).await;
    let reviewers: Vec<ReviewerDto> = read_json(reviewers.unwrap().into_response()).await?;
    assert_eq!(reviewers, vec![reviewer_dto(1, "Teddy", "Smith")]);

    Ok(())
}

/// Expect 422 when the last name is already taken
#[tokio::test]
async fn create_reviewer_rejects_duplicate_last_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_reviewer("Teddy", "Smith")
        .build()
        .await?;

    let result = create_reviewer(
        State(test.into_app_state()),
        Payload(reviewer_dto(0, "Jessica", "smith")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn get_reviewer_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_reviewer(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with every review the reviewer wrote
#[tokio::test]
async fn get_reviews_of_reviewer_returns_reviews() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_pokemon("Pikachu", factory::mock_birth_date(), 1, 1)
        .with_reviewer("Teddy", "Smith")
        .with_reviewer("Jessica", "McGregor")
        .with_review("Electrifying", 5, 1, 1)
        .with_review("Shocking", 3, 1, 2)
        .build()
        .await?;

    let result = get_reviews_of_reviewer(State(test.into_app_state()), Path(2)).await;

    assert!(result.is_ok());
    let reviews: Vec<ReviewDto> = read_json(result.unwrap().into_response()).await?;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].title, "Shocking");

    Ok(())
}

/// Expect 404 for the reviews of an unknown reviewer
#[tokio::test]
async fn get_reviews_of_reviewer_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_tables().build().await?;

    let result = get_reviews_of_reviewer(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the path ID and body ID differ
#[tokio::test]
async fn update_reviewer_rejects_id_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_reviewer("Teddy", "Smith")
        .build()
        .await?;

    let result = update_reviewer(
        State(test.into_app_state()),
        Path(1),
        Payload(reviewer_dto(3, "Teddy", "Smith")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 and the reviewer's reviews deleted with them
#[tokio::test]
async fn delete_reviewer_removes_their_reviews() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_category("Electric")
        .with_country("Kanto")
        .with_owner("Ash", "Ketchum", 1)
        .with_pokemon("Pikachu", factory::mock_birth_date(), 1, 1)
        .with_reviewer("Teddy", "Smith")
        .with_reviewer("Jessica", "McGregor")
        .with_review("Electrifying", 5, 1, 1)
        .with_review("Shocking", 3, 1, 2)
        .build()
        .await?;

    let result = delete_reviewer(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.review().count_reviews_of_pokemon(1).await?, 1);

    Ok(())
}
