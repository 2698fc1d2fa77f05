use sea_orm::DatabaseConnection;

use crate::{
    model::review::ReviewDto,
    server::{
        data::{
            pokemon::PokemonRepository, review::ReviewRepository, reviewer::ReviewerRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_reviews(&self) -> Result<Vec<ReviewDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);

        let reviews = review_repo.get_all().await?;

        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    pub async fn get_review(&self, id: i32) -> Result<ReviewDto, Error> {
        let review_repo = ReviewRepository::new(self.db);

        let review = review_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Review, id))?;

        Ok(review.into())
    }

    /// Reviews of a pokemon, an unknown pokemon simply has none
    pub async fn get_reviews_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<ReviewDto>, Error> {
        let review_repo = ReviewRepository::new(self.db);

        let reviews = review_repo.get_reviews_of_pokemon(pokemon_id).await?;

        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    /// Creates a review of `pokemon_id` written by `reviewer_id`
    ///
    /// Titles are unique across all reviews, compared trimmed and case-insensitively.
    /// Ratings are stored as given.
    pub async fn create_review(
        &self,
        reviewer_id: i32,
        pokemon_id: i32,
        review: ReviewDto,
    ) -> Result<ReviewDto, Error> {
        let review_repo = ReviewRepository::new(self.db);
        let reviewer_repo = ReviewerRepository::new(self.db);
        let pokemon_repo = PokemonRepository::new(self.db);

        if !reviewer_repo.exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }
        if !pokemon_repo.exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        let existing = review_repo.get_all().await?;
        if let Some(title) = find_duplicate(existing.iter().map(|r| r.title.as_str()), &review.title)
        {
            return Err(ResourceError::already_exists(Resource::Review, title).into());
        }

        let created = review_repo
            .create(
                review.title,
                review.text,
                review.rating,
                pokemon_id,
                reviewer_id,
            )
            .await?;

        tracing::debug!(
            "Created review {} of pokemon {} by reviewer {}",
            created.id,
            pokemon_id,
            reviewer_id
        );

        Ok(created.into())
    }

    /// Updates title, text and rating, the reviewed pokemon and author stay as they are
    pub async fn update_review(&self, id: i32, review: ReviewDto) -> Result<(), Error> {
        if review.id != id {
            return Err(ResourceError::id_mismatch(Resource::Review, id, review.id).into());
        }

        let review_repo = ReviewRepository::new(self.db);

        if !review_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Review, id).into());
        }

        if review_repo
            .update(id, review.title, review.text, review.rating)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_saved(Resource::Review, "update", id).into());
        }

        Ok(())
    }

    pub async fn delete_review(&self, id: i32) -> Result<(), Error> {
        let review_repo = ReviewRepository::new(self.db);

        if !review_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Review, id).into());
        }

        let result = review_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Review, "delete", id).into());
        }

        Ok(())
    }
}
