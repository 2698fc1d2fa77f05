//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions.

use chrono::NaiveDate;

use crate::model::{CategoryModel, OwnerModel, PokemonModel, ReviewModel, ReviewerModel};

/// Birth date used by pokemon fixtures: 1903-01-01.
pub fn mock_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1903, 1, 1).unwrap_or_default()
}

pub fn mock_category_model(id: i32, name: &str) -> CategoryModel {
    CategoryModel {
        id,
        name: name.to_string(),
    }
}

pub fn mock_owner_model(id: i32, last_name: &str, country_id: i32) -> OwnerModel {
    OwnerModel {
        id,
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        country_id,
    }
}

pub fn mock_pokemon_model(id: i32, name: &str) -> PokemonModel {
    PokemonModel {
        id,
        name: name.to_string(),
        birth_date: mock_birth_date(),
    }
}

pub fn mock_reviewer_model(id: i32, last_name: &str) -> ReviewerModel {
    ReviewerModel {
        id,
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
    }
}

pub fn mock_review_model(id: i32, rating: i32, pokemon_id: i32, reviewer_id: i32) -> ReviewModel {
    ReviewModel {
        id,
        title: format!("Review {}", id),
        text: "Test review".to_string(),
        rating,
        pokemon_id,
        reviewer_id,
    }
}
