use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_country::Country;

static IDX_OWNER_COUNTRY_ID: &str = "idx-owner-country_id";
static FK_OWNER_COUNTRY_ID: &str = "fk-owner-country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(string(Owner::FirstName))
                    .col(string(Owner::LastName))
                    .col(integer(Owner::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNER_COUNTRY_ID)
                            .from(Owner::Table, Owner::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNER_COUNTRY_ID)
                    .table(Owner::Table)
                    .col(Owner::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNER_COUNTRY_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    FirstName,
    LastName,
    CountryId,
}
