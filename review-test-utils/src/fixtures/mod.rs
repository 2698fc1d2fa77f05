//! Test fixture modules for database row creation.
//!
//! - `pokemon` - Categories, countries, owners, pokemon and their join rows
//! - `review` - Reviewers and reviews
//! - `factory` - In-memory models that never touch the database

pub mod factory;
pub mod pokemon;
pub mod review;
