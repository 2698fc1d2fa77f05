use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All countries ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Country::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Country the owner lives in, `None` when the owner does not exist
    pub async fn get_country_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .inner_join(entity::prelude::Owner)
            .filter(entity::owner::Column::Id.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Owners living in the country ordered by ID
    pub async fn get_owners_by_country(
        &self,
        country_id: i32,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::CountryId.eq(country_id))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::country::Model, DbErr> {
        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        country.insert(self.db).await
    }

    /// Updates the name of a country
    ///
    /// Returns `None` if the country does not exist.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        let Some(country) = entity::prelude::Country::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut country = country.into_active_model();
        country.name = ActiveValue::Set(name);

        Ok(Some(country.update(self.db).await?))
    }

    /// Deletes a country
    ///
    /// Fails with a foreign key violation while owners still live in the country.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Country::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
