//! Fixtures for the pokemon side of the schema.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{
        CategoryModel, CountryModel, OwnerModel, PokemonCategoryModel, PokemonModel,
        PokemonOwnerModel,
    },
    TestContext,
};

impl TestContext {
    /// Access fixtures for categories, countries, owners and pokemon.
    pub fn pokemon<'a>(&'a self) -> PokemonFixtures<'a> {
        PokemonFixtures { setup: self }
    }
}

pub struct PokemonFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PokemonFixtures<'a> {
    pub async fn insert_category(&self, name: &str) -> Result<CategoryModel, TestError> {
        Ok(entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_country(&self, name: &str) -> Result<CountryModel, TestError> {
        Ok(entity::country::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_owner(
        &self,
        first_name: &str,
        last_name: &str,
        country_id: i32,
    ) -> Result<OwnerModel, TestError> {
        Ok(entity::owner::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            country_id: ActiveValue::Set(country_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a pokemon without any owner or category links.
    pub async fn insert_pokemon(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> Result<PokemonModel, TestError> {
        Ok(entity::pokemon::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            birth_date: ActiveValue::Set(birth_date),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn link_owner(
        &self,
        pokemon_id: i32,
        owner_id: i32,
    ) -> Result<PokemonOwnerModel, TestError> {
        Ok(entity::prelude::PokemonOwner::insert(entity::pokemon_owner::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            owner_id: ActiveValue::Set(owner_id),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn link_category(
        &self,
        pokemon_id: i32,
        category_id: i32,
    ) -> Result<PokemonCategoryModel, TestError> {
        Ok(
            entity::prelude::PokemonCategory::insert(entity::pokemon_category::ActiveModel {
                pokemon_id: ActiveValue::Set(pokemon_id),
                category_id: ActiveValue::Set(category_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a pokemon linked to one owner and one category.
    pub async fn insert_pokemon_with_owner_and_category(
        &self,
        name: &str,
        birth_date: NaiveDate,
        owner_id: i32,
        category_id: i32,
    ) -> Result<PokemonModel, TestError> {
        let pokemon = self.insert_pokemon(name, birth_date).await?;

        self.link_owner(pokemon.id, owner_id).await?;
        self.link_category(pokemon.id, category_id).await?;

        Ok(pokemon)
    }

    /// Insert a country, an owner in that country, a category and a pokemon linked to both.
    ///
    /// # Returns
    /// The pokemon, owner and category models, in that order
    pub async fn insert_mock_pokemon(
        &self,
        name: &str,
    ) -> Result<(PokemonModel, OwnerModel, CategoryModel), TestError> {
        let country = self.insert_country(&format!("{} Country", name)).await?;
        let owner = self
            .insert_owner("Test", &format!("{} Owner", name), country.id)
            .await?;
        let category = self.insert_category(&format!("{} Category", name)).await?;

        let pokemon = self
            .insert_pokemon_with_owner_and_category(
                name,
                super::factory::mock_birth_date(),
                owner.id,
                category.id,
            )
            .await?;

        Ok((pokemon, owner, category))
    }

    pub async fn get_owner_links(
        &self,
        pokemon_id: i32,
    ) -> Result<Vec<PokemonOwnerModel>, TestError> {
        Ok(entity::prelude::PokemonOwner::find()
            .filter(entity::pokemon_owner::Column::PokemonId.eq(pokemon_id))
            .all(&self.setup.db)
            .await?)
    }

    pub async fn get_category_links(
        &self,
        pokemon_id: i32,
    ) -> Result<Vec<PokemonCategoryModel>, TestError> {
        Ok(entity::prelude::PokemonCategory::find()
            .filter(entity::pokemon_category::Column::PokemonId.eq(pokemon_id))
            .all(&self.setup.db)
            .await?)
    }
}
