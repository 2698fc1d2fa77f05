use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All reviews ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_reviews_of_pokemon(
        &self,
        pokemon_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::PokemonId.eq(pokemon_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        title: String,
        text: String,
        rating: i32,
        pokemon_id: i32,
        reviewer_id: i32,
    ) -> Result<entity::review::Model, DbErr> {
        let review = entity::review::ActiveModel {
            title: ActiveValue::Set(title),
            text: ActiveValue::Set(text),
            rating: ActiveValue::Set(rating),
            pokemon_id: ActiveValue::Set(pokemon_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    /// Updates title, text and rating, the pokemon and reviewer links are left as is
    ///
    /// Returns `None` if the review does not exist.
    pub async fn update(
        &self,
        id: i32,
        title: String,
        text: String,
        rating: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut review = review.into_active_model();
        review.title = ActiveValue::Set(title);
        review.text = ActiveValue::Set(text);
        review.rating = ActiveValue::Set(rating);

        Ok(Some(review.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_by_id(id).exec(self.db).await
    }

    /// Deletes every review of a pokemon
    ///
    /// Deleting zero reviews is not an error, check [`DeleteResult::rows_affected`] for the count.
    pub async fn delete_reviews_of_pokemon(&self, pokemon_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await
    }

    /// Deletes every review written by a reviewer
    pub async fn delete_reviews_by_reviewer(
        &self,
        reviewer_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::ReviewerId.eq(reviewer_id))
            .exec(self.db)
            .await
    }
}
