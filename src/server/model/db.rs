//! Database model type aliases.

pub type CategoryModel = entity::category::Model;

pub type CountryModel = entity::country::Model;

/// Owner record, `country_id` references the country the owner lives in
pub type OwnerModel = entity::owner::Model;

pub type PokemonModel = entity::pokemon::Model;

/// Review record, linked to exactly one pokemon and one reviewer
pub type ReviewModel = entity::review::Model;

pub type ReviewerModel = entity::reviewer::Model;
