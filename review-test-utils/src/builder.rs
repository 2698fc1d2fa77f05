//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures reference each other by database ID. IDs are assigned in insertion order starting
/// at 1 for every table, so the first category queued is category 1, the second is 2, and so on.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_review_tables: bool,

    // Database fixtures to insert
    categories: Vec<String>,
    countries: Vec<String>,
    owners: Vec<(String, String, i32)>, // (first_name, last_name, country_id)
    pokemon: Vec<(String, NaiveDate, i32, i32)>, // (name, birth_date, owner_id, category_id)
    reviewers: Vec<(String, String)>,   // (first_name, last_name)
    reviews: Vec<(String, i32, i32, i32)>, // (title, rating, pokemon_id, reviewer_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_review_tables: false,
            categories: Vec::new(),
            countries: Vec::new(),
            owners: Vec::new(),
            pokemon: Vec::new(),
            reviewers: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Add every table of the review schema to the test database.
    ///
    /// Tables are created in foreign key order: Category, Country, Owner, Pokemon, Reviewer,
    /// Review, PokemonCategory and PokemonOwner.
    pub fn with_review_tables(mut self) -> Self {
        self.include_review_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use review_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), review_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Category)
    ///     .with_table(Pokemon)
    ///     .with_table(PokemonCategory)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a category into the database.
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Insert a country into the database.
    pub fn with_country(mut self, name: impl Into<String>) -> Self {
        self.countries.push(name.into());
        self
    }

    /// Insert an owner living in `country_id` into the database.
    pub fn with_owner(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        country_id: i32,
    ) -> Self {
        self.owners
            .push((first_name.into(), last_name.into(), country_id));
        self
    }

    /// Insert a pokemon into the database, linked to one owner and one category.
    ///
    /// The owner and category must be queued before the pokemon.
    pub fn with_pokemon(
        mut self,
        name: impl Into<String>,
        birth_date: NaiveDate,
        owner_id: i32,
        category_id: i32,
    ) -> Self {
        self.pokemon
            .push((name.into(), birth_date, owner_id, category_id));
        self
    }

    /// Insert a reviewer into the database.
    pub fn with_reviewer(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.reviewers.push((first_name.into(), last_name.into()));
        self
    }

    /// Insert a review of `pokemon_id` written by `reviewer_id` into the database.
    pub fn with_review(
        mut self,
        title: impl Into<String>,
        rating: i32,
        pokemon_id: i32,
        reviewer_id: i32,
    ) -> Self {
        self.reviews
            .push((title.into(), rating, pokemon_id, reviewer_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (review tables if specified, then custom tables)
    /// 2. Inserts database fixtures (categories, countries, owners, pokemon, reviewers, reviews)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_review_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Country),
                schema.create_table_from_entity(entity::prelude::Owner),
                schema.create_table_from_entity(entity::prelude::Pokemon),
                schema.create_table_from_entity(entity::prelude::Reviewer),
                schema.create_table_from_entity(entity::prelude::Review),
                schema.create_table_from_entity(entity::prelude::PokemonCategory),
                schema.create_table_from_entity(entity::prelude::PokemonOwner),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.categories {
            setup.pokemon().insert_category(&name).await?;
        }

        for name in self.countries {
            setup.pokemon().insert_country(&name).await?;
        }

        for (first_name, last_name, country_id) in self.owners {
            setup
                .pokemon()
                .insert_owner(&first_name, &last_name, country_id)
                .await?;
        }

        for (name, birth_date, owner_id, category_id) in self.pokemon {
            setup
                .pokemon()
                .insert_pokemon_with_owner_and_category(&name, birth_date, owner_id, category_id)
                .await?;
        }

        for (first_name, last_name) in self.reviewers {
            setup.review().insert_reviewer(&first_name, &last_name).await?;
        }

        for (title, rating, pokemon_id, reviewer_id) in self.reviews {
            setup
                .review()
                .insert_review(&title, rating, pokemon_id, reviewer_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
