use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All owners ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Owner::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pokemon owned by the owner ordered by ID
    pub async fn get_pokemon_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .inner_join(entity::prelude::PokemonOwner)
            .filter(entity::pokemon_owner::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Owners of the pokemon ordered by ID
    pub async fn get_owners_of_pokemon(
        &self,
        pokemon_id: i32,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .inner_join(entity::prelude::PokemonOwner)
            .filter(entity::pokemon_owner::Column::PokemonId.eq(pokemon_id))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        country_id: i32,
    ) -> Result<entity::owner::Model, DbErr> {
        let owner = entity::owner::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            country_id: ActiveValue::Set(country_id),
            ..Default::default()
        };

        owner.insert(self.db).await
    }

    /// Updates the name of an owner, the country link is left as is
    ///
    /// Returns `None` if the owner does not exist.
    pub async fn update(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        let Some(owner) = entity::prelude::Owner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut owner = owner.into_active_model();
        owner.first_name = ActiveValue::Set(first_name);
        owner.last_name = ActiveValue::Set(last_name);

        Ok(Some(owner.update(self.db).await?))
    }

    /// Deletes an owner along with its pokemon links
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Owner::delete_by_id(id).exec(self.db).await
    }
}
