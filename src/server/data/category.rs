use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All categories ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pokemon linked to the category, empty when the category does not exist
    pub async fn get_pokemon_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .inner_join(entity::prelude::PokemonCategory)
            .filter(entity::pokemon_category::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    /// Updates the name of a category
    ///
    /// Returns `None` if the category does not exist.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut category = category.into_active_model();
        category.name = ActiveValue::Set(name);

        Ok(Some(category.update(self.db).await?))
    }

    /// Deletes a category along with its pokemon links
    ///
    /// Returns OK regardless of the category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
