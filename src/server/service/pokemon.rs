use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::pokemon::PokemonDto,
    server::{
        data::{
            category::CategoryRepository, owner::OwnerRepository, pokemon::PokemonRepository,
            review::ReviewRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of [`PokemonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_pokemons(&self) -> Result<Vec<PokemonDto>, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        let pokemon = pokemon_repo.get_all().await?;

        Ok(pokemon.into_iter().map(PokemonDto::from).collect())
    }

    pub async fn get_pokemon(&self, id: i32) -> Result<PokemonDto, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        let pokemon = pokemon_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Pokemon, id))?;

        Ok(pokemon.into())
    }

    /// Average review rating of a pokemon, `0.0` if nobody has reviewed it yet
    pub async fn get_pokemon_rating(&self, id: i32) -> Result<f64, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        if !pokemon_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, id).into());
        }

        Ok(pokemon_repo.get_rating(id).await?)
    }

    /// Creates a pokemon owned by `owner_id` in category `category_id`
    ///
    /// The pokemon row and both link rows are written in one transaction.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound)` - Owner or category does not exist
    /// - `Err(ResourceError::AlreadyExists)` - A pokemon with the same name exists
    pub async fn create_pokemon(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: PokemonDto,
    ) -> Result<PokemonDto, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);
        let owner_repo = OwnerRepository::new(self.db);
        let category_repo = CategoryRepository::new(self.db);

        if !owner_repo.exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }
        if !category_repo.exists(category_id).await? {
            return Err(ResourceError::not_found(Resource::Category, category_id).into());
        }

        let existing = pokemon_repo.get_all().await?;
        if let Some(name) = find_duplicate(existing.iter().map(|p| p.name.as_str()), &pokemon.name)
        {
            return Err(ResourceError::already_exists(Resource::Pokemon, name).into());
        }

        let txn = self.db.begin().await?;

        let created = PokemonRepository::new(&txn)
            .create(owner_id, category_id, pokemon.name, pokemon.birth_date)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Created pokemon {} for owner {} in category {}",
            created.id,
            owner_id,
            category_id
        );

        Ok(created.into())
    }

    /// Updates name and birth date, owner and category stay as they are
    pub async fn update_pokemon(&self, id: i32, pokemon: PokemonDto) -> Result<(), Error> {
        if pokemon.id != id {
            return Err(ResourceError::id_mismatch(Resource::Pokemon, id, pokemon.id).into());
        }

        let pokemon_repo = PokemonRepository::new(self.db);

        if !pokemon_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, id).into());
        }

        if pokemon_repo
            .update(id, pokemon.name, pokemon.birth_date)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_saved(Resource::Pokemon, "update", id).into());
        }

        Ok(())
    }

    /// Deletes a pokemon together with all of its reviews
    ///
    /// Reviews are removed first, in the same transaction as the pokemon. If any step fails
    /// the transaction is dropped without commit and nothing is deleted.
    pub async fn delete_pokemon(&self, id: i32) -> Result<(), Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        if !pokemon_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, id).into());
        }

        let txn = self.db.begin().await?;

        let reviews = ReviewRepository::new(&txn)
            .delete_reviews_of_pokemon(id)
            .await?;

        let result = PokemonRepository::new(&txn).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Pokemon, "delete", id).into());
        }

        txn.commit().await?;

        tracing::debug!(
            "Deleted pokemon {} and {} review(s)",
            id,
            reviews.rows_affected
        );

        Ok(())
    }
}
