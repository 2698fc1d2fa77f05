use sea_orm::DatabaseConnection;

use crate::{
    model::{owner::OwnerDto, pokemon::PokemonDto},
    server::{
        data::{country::CountryRepository, owner::OwnerRepository, pokemon::PokemonRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_owners(&self) -> Result<Vec<OwnerDto>, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        let owners = owner_repo.get_all().await?;

        Ok(owners.into_iter().map(OwnerDto::from).collect())
    }

    pub async fn get_owner(&self, id: i32) -> Result<OwnerDto, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        let owner = owner_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Owner, id))?;

        Ok(owner.into())
    }

    pub async fn get_pokemon_of_owner(&self, owner_id: i32) -> Result<Vec<PokemonDto>, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        if !owner_repo.exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        let pokemon = owner_repo.get_pokemon_by_owner(owner_id).await?;

        Ok(pokemon.into_iter().map(PokemonDto::from).collect())
    }

    pub async fn get_owners_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<OwnerDto>, Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let pokemon_repo = PokemonRepository::new(self.db);

        if !pokemon_repo.exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        let owners = owner_repo.get_owners_of_pokemon(pokemon_id).await?;

        Ok(owners.into_iter().map(OwnerDto::from).collect())
    }

    /// Creates an owner living in `country_id`
    ///
    /// Owners are considered duplicates when their last names match, trimmed and
    /// case-insensitively. First names are not compared.
    pub async fn create_owner(&self, country_id: i32, owner: OwnerDto) -> Result<OwnerDto, Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        let existing = owner_repo.get_all().await?;
        if let Some(name) = find_duplicate(
            existing.iter().map(|o| o.last_name.as_str()),
            &owner.last_name,
        ) {
            return Err(ResourceError::already_exists(Resource::Owner, name).into());
        }

        let created = owner_repo
            .create(owner.first_name, owner.last_name, country_id)
            .await?;

        tracing::debug!("Created owner {} in country {}", created.id, country_id);

        Ok(created.into())
    }

    pub async fn update_owner(&self, id: i32, owner: OwnerDto) -> Result<(), Error> {
        if owner.id != id {
            return Err(ResourceError::id_mismatch(Resource::Owner, id, owner.id).into());
        }

        let owner_repo = OwnerRepository::new(self.db);

        if !owner_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Owner, id).into());
        }

        if owner_repo
            .update(id, owner.first_name, owner.last_name)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_saved(Resource::Owner, "update", id).into());
        }

        Ok(())
    }

    pub async fn delete_owner(&self, id: i32) -> Result<(), Error> {
        let owner_repo = OwnerRepository::new(self.db);

        if !owner_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Owner, id).into());
        }

        let result = owner_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Owner, "delete", id).into());
        }

        Ok(())
    }
}
