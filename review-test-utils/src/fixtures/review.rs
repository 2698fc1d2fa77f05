//! Fixtures for reviewers and their reviews.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{ReviewModel, ReviewerModel},
    TestContext,
};

impl TestContext {
    /// Access fixtures for reviewers and reviews.
    pub fn review<'a>(&'a self) -> ReviewFixtures<'a> {
        ReviewFixtures { setup: self }
    }
}

pub struct ReviewFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReviewFixtures<'a> {
    pub async fn insert_reviewer(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<ReviewerModel, TestError> {
        Ok(entity::reviewer::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_review(
        &self,
        title: &str,
        rating: i32,
        pokemon_id: i32,
        reviewer_id: i32,
    ) -> Result<ReviewModel, TestError> {
        Ok(entity::review::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            text: ActiveValue::Set(format!("{} review text", title)),
            rating: ActiveValue::Set(rating),
            pokemon_id: ActiveValue::Set(pokemon_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert one review per rating for `pokemon_id`, all by `reviewer_id`.
    pub async fn insert_reviews_with_ratings(
        &self,
        pokemon_id: i32,
        reviewer_id: i32,
        ratings: &[i32],
    ) -> Result<Vec<ReviewModel>, TestError> {
        let mut reviews = Vec::with_capacity(ratings.len());

        for (i, rating) in ratings.iter().enumerate() {
            let review = self
                .insert_review(&format!("Review {}", i + 1), *rating, pokemon_id, reviewer_id)
                .await?;
            reviews.push(review);
        }

        Ok(reviews)
    }

    pub async fn count_reviews_of_pokemon(&self, pokemon_id: i32) -> Result<usize, TestError> {
        Ok(entity::prelude::Review::find()
            .filter(entity::review::Column::PokemonId.eq(pokemon_id))
            .all(&self.setup.db)
            .await?
            .len())
    }
}
