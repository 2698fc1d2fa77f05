pub use sea_orm_migration::prelude::*;

mod m20251020_000001_category;
mod m20251020_000002_country;
mod m20251020_000003_owner;
mod m20251020_000004_pokemon;
mod m20251020_000005_reviewer;
mod m20251020_000006_review;
mod m20251020_000007_pokemon_category;
mod m20251020_000008_pokemon_owner;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_category::Migration),
            Box::new(m20251020_000002_country::Migration),
            Box::new(m20251020_000003_owner::Migration),
            Box::new(m20251020_000004_pokemon::Migration),
            Box::new(m20251020_000005_reviewer::Migration),
            Box::new(m20251020_000006_review::Migration),
            Box::new(m20251020_000007_pokemon_category::Migration),
            Box::new(m20251020_000008_pokemon_owner::Migration),
        ]
    }
}
