use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::{resource::ResourceError, Error};

/// A `Json<T>` wrapper that reports missing or malformed request bodies as
/// `400 Bad Request` with an `ErrorDto` body instead of axum's plain text rejection.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ResourceError::InvalidPayload(e.body_text()))?;

        Ok(Payload(value))
    }
}
