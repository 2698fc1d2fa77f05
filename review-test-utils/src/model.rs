//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main crate so fixtures and assertions read the same way
//! on both sides.

pub type CategoryModel = entity::category::Model;
pub type CountryModel = entity::country::Model;
pub type OwnerModel = entity::owner::Model;
pub type PokemonModel = entity::pokemon::Model;
pub type PokemonCategoryModel = entity::pokemon_category::Model;
pub type PokemonOwnerModel = entity::pokemon_owner::Model;
pub type ReviewModel = entity::review::Model;
pub type ReviewerModel = entity::reviewer::Model;
