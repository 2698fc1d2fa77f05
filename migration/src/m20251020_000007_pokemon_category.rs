use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_category::Category, m20251020_000004_pokemon::Pokemon};

static PK_POKEMON_CATEGORY: &str = "pk-pokemon_category";
static IDX_POKEMON_CATEGORY_CATEGORY_ID: &str = "idx-pokemon_category-category_id";
static FK_POKEMON_CATEGORY_POKEMON_ID: &str = "fk-pokemon_category-pokemon_id";
static FK_POKEMON_CATEGORY_CATEGORY_ID: &str = "fk-pokemon_category-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonCategory::Table)
                    .if_not_exists()
                    .col(integer(PokemonCategory::PokemonId))
                    .col(integer(PokemonCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .name(PK_POKEMON_CATEGORY)
                            .col(PokemonCategory::PokemonId)
                            .col(PokemonCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_CATEGORY_POKEMON_ID)
                            .from(PokemonCategory::Table, PokemonCategory::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_CATEGORY_CATEGORY_ID)
                            .from(PokemonCategory::Table, PokemonCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite key already covers lookups by pokemon_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_CATEGORY_CATEGORY_ID)
                    .table(PokemonCategory::Table)
                    .col(PokemonCategory::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_CATEGORY_CATEGORY_ID)
                    .table(PokemonCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokemonCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PokemonCategory {
    Table,
    PokemonId,
    CategoryId,
}
