use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    /// Ignored on create, must match the path ID on update
    #[serde(default)]
    pub id: i32,
    pub name: String,
}
