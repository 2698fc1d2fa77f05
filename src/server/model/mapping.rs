//! Field-by-field conversions from database models into transfer objects.
//!
//! Conversions only go one way. Incoming DTOs are taken apart by the services, which decide
//! which fields are written and where foreign keys come from.

use crate::{
    model::{
        category::CategoryDto, country::CountryDto, owner::OwnerDto, pokemon::PokemonDto,
        review::ReviewDto, reviewer::ReviewerDto,
    },
    server::model::db::{
        CategoryModel, CountryModel, OwnerModel, PokemonModel, ReviewModel, ReviewerModel,
    },
};

impl From<CategoryModel> for CategoryDto {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<CountryModel> for CountryDto {
    fn from(model: CountryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<OwnerModel> for OwnerDto {
    fn from(model: OwnerModel) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}

impl From<PokemonModel> for PokemonDto {
    fn from(model: PokemonModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_date: model.birth_date,
        }
    }
}

/// Foreign keys stay behind, the DTO only exposes the review itself
impl From<ReviewModel> for ReviewDto {
    fn from(model: ReviewModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            text: model.text,
            rating: model.rating,
        }
    }
}

impl From<ReviewerModel> for ReviewerDto {
    fn from(model: ReviewerModel) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}
