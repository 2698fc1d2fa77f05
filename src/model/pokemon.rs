use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    /// Ignored on create, must match the path ID on update
    #[serde(default)]
    pub id: i32,
    pub name: String,
    /// ISO 8601 date, e.g. `1903-01-01`
    pub birth_date: NaiveDate,
}

/// Query parameters for creating a pokemon
///
/// The new pokemon is linked to exactly one owner and one category.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreatePokemonParams {
    pub owner_id: i32,
    pub category_id: i32,
}
