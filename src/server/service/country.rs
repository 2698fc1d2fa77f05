use sea_orm::DatabaseConnection;

use crate::{
    model::{country::CountryDto, owner::OwnerDto},
    server::{
        data::{country::CountryRepository, owner::OwnerRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    /// Creates a new instance of [`CountryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_countries(&self) -> Result<Vec<CountryDto>, Error> {
        let country_repo = CountryRepository::new(self.db);

        let countries = country_repo.get_all().await?;

        Ok(countries.into_iter().map(CountryDto::from).collect())
    }

    pub async fn get_country(&self, id: i32) -> Result<CountryDto, Error> {
        let country_repo = CountryRepository::new(self.db);

        let country = country_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Country, id))?;

        Ok(country.into())
    }

    /// Country the owner lives in
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound)` - Owner does not exist
    /// - `Err(Error::InternalError)` - Owner exists but its country row is gone
    pub async fn get_country_of_owner(&self, owner_id: i32) -> Result<CountryDto, Error> {
        let owner_repo = OwnerRepository::new(self.db);
        let country_repo = CountryRepository::new(self.db);

        if !owner_repo.exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        let country = country_repo
            .get_country_by_owner(owner_id)
            .await?
            .ok_or_else(|| Error::InternalError(format!("Owner {owner_id} has no country")))?;

        Ok(country.into())
    }

    pub async fn get_owners_of_country(&self, country_id: i32) -> Result<Vec<OwnerDto>, Error> {
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        let owners = country_repo.get_owners_by_country(country_id).await?;

        Ok(owners.into_iter().map(OwnerDto::from).collect())
    }

    /// Creates a country unless another one already has the same name
    pub async fn create_country(&self, country: CountryDto) -> Result<CountryDto, Error> {
        let country_repo = CountryRepository::new(self.db);

        let existing = country_repo.get_all().await?;
        if let Some(name) = find_duplicate(existing.iter().map(|c| c.name.as_str()), &country.name)
        {
            return Err(ResourceError::already_exists(Resource::Country, name).into());
        }

        let created = country_repo.create(country.name).await?;

        tracing::debug!("Created country {} ({})", created.id, created.name);

        Ok(created.into())
    }

    pub async fn update_country(&self, id: i32, country: CountryDto) -> Result<(), Error> {
        if country.id != id {
            return Err(ResourceError::id_mismatch(Resource::Country, id, country.id).into());
        }

        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Country, id).into());
        }

        if country_repo.update(id, country.name).await?.is_none() {
            return Err(ResourceError::not_saved(Resource::Country, "update", id).into());
        }

        Ok(())
    }

    /// Deletes a country
    ///
    /// Owners still living in the country block the delete with a database error.
    pub async fn delete_country(&self, id: i32) -> Result<(), Error> {
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Country, id).into());
        }

        let result = country_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Country, "delete", id).into());
        }

        Ok(())
    }
}
