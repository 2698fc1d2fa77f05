use sea_orm::DatabaseConnection;

use crate::{
    model::{category::CategoryDto, pokemon::PokemonDto},
    server::{
        data::category::CategoryRepository,
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let categories = category_repo.get_all().await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn get_category(&self, id: i32) -> Result<CategoryDto, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let category = category_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Category, id))?;

        Ok(category.into())
    }

    /// Pokemon in the category, an unknown category simply has none
    pub async fn get_pokemon_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<PokemonDto>, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let pokemon = category_repo.get_pokemon_by_category(category_id).await?;

        Ok(pokemon.into_iter().map(PokemonDto::from).collect())
    }

    /// Creates a category unless another one already has the same name
    ///
    /// Names are compared trimmed and case-insensitively. The check and the insert are
    /// separate statements, so two concurrent requests for the same name can both pass it.
    pub async fn create_category(&self, category: CategoryDto) -> Result<CategoryDto, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let existing = category_repo.get_all().await?;
        if let Some(name) = find_duplicate(existing.iter().map(|c| c.name.as_str()), &category.name)
        {
            return Err(ResourceError::already_exists(Resource::Category, name).into());
        }

        let created = category_repo.create(category.name).await?;

        tracing::debug!("Created category {} ({})", created.id, created.name);

        Ok(created.into())
    }

    pub async fn update_category(&self, id: i32, category: CategoryDto) -> Result<(), Error> {
        if category.id != id {
            return Err(ResourceError::id_mismatch(Resource::Category, id, category.id).into());
        }

        let category_repo = CategoryRepository::new(self.db);

        if !category_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Category, id).into());
        }

        if category_repo.update(id, category.name).await?.is_none() {
            return Err(ResourceError::not_saved(Resource::Category, "update", id).into());
        }

        Ok(())
    }

    pub async fn delete_category(&self, id: i32) -> Result<(), Error> {
        let category_repo = CategoryRepository::new(self.db);

        if !category_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Category, id).into());
        }

        let result = category_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Category, "delete", id).into());
        }

        Ok(())
    }
}
