use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// The kinds of records exposed over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Category,
    Country,
    Owner,
    Pokemon,
    Review,
    Reviewer,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Category => "Category",
            Self::Country => "Country",
            Self::Owner => "Owner",
            Self::Pokemon => "Pokemon",
            Self::Review => "Review",
            Self::Reviewer => "Reviewer",
        };

        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Request body is missing or is not valid JSON for the expected type
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),
    /// Body ID of an update disagrees with the path ID
    #[error("{resource} ID {body_id} in request body does not match ID {path_id} in path")]
    IdMismatch {
        resource: Resource,
        path_id: i32,
        body_id: i32,
    },
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: Resource, id: i32 },
    /// Another record already uses this name (trimmed, case-insensitive)
    #[error("{resource} \"{name}\" already exists")]
    AlreadyExists { resource: Resource, name: String },
    /// The write reached the database but no row was changed
    #[error("Failed to {action} {resource} with ID {id}")]
    NotSaved {
        resource: Resource,
        action: &'static str,
        id: i32,
    },
}

impl ResourceError {
    pub fn not_found(resource: Resource, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn already_exists(resource: Resource, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            resource,
            name: name.into(),
        }
    }

    pub fn id_mismatch(resource: Resource, path_id: i32, body_id: i32) -> Self {
        Self::IdMismatch {
            resource,
            path_id,
            body_id,
        }
    }

    pub fn not_saved(resource: Resource, action: &'static str, id: i32) -> Self {
        Self::NotSaved {
            resource,
            action,
            id,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidPayload(_) | Self::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotSaved { .. } => return InternalServerError(self).into_response(),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
