use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ReviewerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewerRepository<'a, C> {
    /// Creates a new instance of [`ReviewerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All reviewers ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::reviewer::Model>, DbErr> {
        entity::prelude::Reviewer::find()
            .order_by_asc(entity::reviewer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::reviewer::Model>, DbErr> {
        entity::prelude::Reviewer::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reviewer::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Reviews written by the reviewer ordered by ID
    pub async fn get_reviews_by_reviewer(
        &self,
        reviewer_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::ReviewerId.eq(reviewer_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<entity::reviewer::Model, DbErr> {
        let reviewer = entity::reviewer::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            ..Default::default()
        };

        reviewer.insert(self.db).await
    }

    /// Returns `None` if the reviewer does not exist.
    pub async fn update(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<Option<entity::reviewer::Model>, DbErr> {
        let Some(reviewer) = entity::prelude::Reviewer::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut reviewer = reviewer.into_active_model();
        reviewer.first_name = ActiveValue::Set(first_name);
        reviewer.last_name = ActiveValue::Set(last_name);

        Ok(Some(reviewer.update(self.db).await?))
    }

    /// Deletes a reviewer
    ///
    /// Fails with a foreign key violation while reviews by this reviewer remain, delete them
    /// first with
    /// [`ReviewRepository::delete_reviews_by_reviewer`](crate::server::data::review::ReviewRepository::delete_reviews_by_reviewer).
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reviewer::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
