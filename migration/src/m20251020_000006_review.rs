use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000004_pokemon::Pokemon, m20251020_000005_reviewer::Reviewer};

static IDX_REVIEW_POKEMON_ID: &str = "idx-review-pokemon_id";
static IDX_REVIEW_REVIEWER_ID: &str = "idx-review-reviewer_id";
static FK_REVIEW_POKEMON_ID: &str = "fk-review-pokemon_id";
static FK_REVIEW_REVIEWER_ID: &str = "fk-review-reviewer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reviews are removed by the application before their pokemon or reviewer,
        // so neither foreign key cascades.
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string(Review::Title))
                    .col(text(Review::Text))
                    .col(integer(Review::Rating))
                    .col(integer(Review::PokemonId))
                    .col(integer(Review::ReviewerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_POKEMON_ID)
                            .from(Review::Table, Review::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_REVIEWER_ID)
                            .from(Review::Table, Review::ReviewerId)
                            .to(Reviewer::Table, Reviewer::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_POKEMON_ID)
                    .table(Review::Table)
                    .col(Review::PokemonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_REVIEWER_ID)
                    .table(Review::Table)
                    .col(Review::ReviewerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_REVIEWER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_POKEMON_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    Title,
    Text,
    Rating,
    PokemonId,
    ReviewerId,
}
