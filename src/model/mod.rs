//! Transfer objects exchanged over the HTTP API.
//!
//! Every type here serializes with camelCase field names and derives a utoipa schema so it
//! shows up in the OpenAPI document.

pub mod api;
pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
