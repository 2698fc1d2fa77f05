use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All pokemon ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find_by_id(id).one(self.db).await
    }

    /// Exact, case-sensitive name lookup
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::Name.eq(name))
            .order_by_asc(entity::pokemon::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Pokemon::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Mean rating over every review of the pokemon, `0.0` when it has none
    pub async fn get_rating(&self, id: i32) -> Result<f64, DbErr> {
        let ratings: Vec<i32> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::PokemonId.eq(id))
            .into_tuple()
            .all(self.db)
            .await?;

        if ratings.is_empty() {
            return Ok(0.0);
        }

        let total: i64 = ratings.iter().map(|rating| i64::from(*rating)).sum();

        Ok(total as f64 / ratings.len() as f64)
    }

    /// Inserts a pokemon and links it to one owner and one category
    ///
    /// Runs three inserts, pass a transaction as the connection so a failed link does not
    /// leave an orphaned pokemon behind.
    pub async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        name: String,
        birth_date: NaiveDate,
    ) -> Result<entity::pokemon::Model, DbErr> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(name),
            birth_date: ActiveValue::Set(birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::prelude::PokemonOwner::insert(entity::pokemon_owner::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon.id),
            owner_id: ActiveValue::Set(owner_id),
        })
        .exec_without_returning(self.db)
        .await?;

        entity::prelude::PokemonCategory::insert(entity::pokemon_category::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon.id),
            category_id: ActiveValue::Set(category_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(pokemon)
    }

    /// Updates name and birth date, owner and category links are left as is
    ///
    /// Returns `None` if the pokemon does not exist.
    pub async fn update(
        &self,
        id: i32,
        name: String,
        birth_date: NaiveDate,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        let Some(pokemon) = entity::prelude::Pokemon::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut pokemon = pokemon.into_active_model();
        pokemon.name = ActiveValue::Set(name);
        pokemon.birth_date = ActiveValue::Set(birth_date);

        Ok(Some(pokemon.update(self.db).await?))
    }

    /// Deletes a pokemon along with its owner and category links
    ///
    /// Reviews are not removed, delete them first with
    /// [`ReviewRepository::delete_reviews_of_pokemon`](crate::server::data::review::ReviewRepository::delete_reviews_of_pokemon).
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pokemon::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
