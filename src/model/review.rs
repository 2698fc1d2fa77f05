use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    /// Ignored on create, must match the path ID on update
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
}

/// Query parameters for creating a review
///
/// The reviewed pokemon and the author are always taken from the query string,
/// never from the request body.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateReviewParams {
    #[serde(rename = "reviewerId")]
    #[param(rename = "reviewerId")]
    pub reviewer_id: i32,
    #[serde(rename = "pokeId")]
    #[param(rename = "pokeId")]
    pub pokemon_id: i32,
}
