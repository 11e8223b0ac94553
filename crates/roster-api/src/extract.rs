//! Validation extractors
//!
//! The request-validation stage of the pipeline, expressed as axum
//! extractors: a rejected extraction short-circuits with a 400 envelope and
//! the handler never runs.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has passed its declared schema
///
/// Parses the body, then runs the DTO's `validator` constraints. Handlers
/// receive the normalized value; the raw body is never re-read downstream.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment, parsed as a positive integer
///
/// Handlers receive the parsed id and never touch the raw segment.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidPathParam("id"))?;
        parse_user_id(&raw).map(Self).ok_or(ApiError::InvalidPathParam("id"))
    }
}

fn parse_user_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
