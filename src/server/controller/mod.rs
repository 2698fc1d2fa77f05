//! HTTP controller endpoints for the Pokémon review API.
//!
//! One module per resource. Handlers extract path, query and body, call the matching service
//! and turn the result into a response; every rule about what a request may do lives in the
//! services. Each handler carries a utoipa annotation that feeds the OpenAPI document.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
pub mod util;
