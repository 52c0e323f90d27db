//! Extractors that turn axum rejections into [`AppError`] JSON responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are validation errors (400).
///
/// Axum's own `Json` answers 415 or 422 for some malformed bodies; every
/// body that does not bind to `T` is a 400 here.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            })?;
        Ok(ValidJson(value))
    }
}

/// A positive integer `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::BadRequest(rejection.body_text()))?;
        if id <= 0 {
            return Err(AppError::BadRequest(format!(
                "id must be a positive integer, got {id}"
            )));
        }
        Ok(IdPath(id))
    }
}
