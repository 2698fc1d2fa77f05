use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000003_owner::Owner, m20251020_000004_pokemon::Pokemon};

static PK_POKEMON_OWNER: &str = "pk-pokemon_owner";
static IDX_POKEMON_OWNER_OWNER_ID: &str = "idx-pokemon_owner-owner_id";
static FK_POKEMON_OWNER_POKEMON_ID: &str = "fk-pokemon_owner-pokemon_id";
static FK_POKEMON_OWNER_OWNER_ID: &str = "fk-pokemon_owner-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonOwner::Table)
                    .if_not_exists()
                    .col(integer(PokemonOwner::PokemonId))
                    .col(integer(PokemonOwner::OwnerId))
                    .primary_key(
                        Index::create()
                            .name(PK_POKEMON_OWNER)
                            .col(PokemonOwner::PokemonId)
                            .col(PokemonOwner::OwnerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_OWNER_POKEMON_ID)
                            .from(PokemonOwner::Table, PokemonOwner::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_OWNER_OWNER_ID)
                            .from(PokemonOwner::Table, PokemonOwner::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_OWNER_OWNER_ID)
                    .table(PokemonOwner::Table)
                    .col(PokemonOwner::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_OWNER_OWNER_ID)
                    .table(PokemonOwner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokemonOwner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PokemonOwner {
    Table,
    PokemonId,
    OwnerId,
}
