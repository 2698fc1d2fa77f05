use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    /// Ignored on create, must match the path ID on update
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Query parameters for creating an owner
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateOwnerParams {
    /// Country the owner lives in
    pub country_id: i32,
}
