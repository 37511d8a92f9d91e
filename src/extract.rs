//! Request extractors whose rejections are reported as `ApiError`s.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Drop-in for `axum::Json` on request bodies. Missing fields, wrong types,
/// malformed JSON and a missing content type all become a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(ApiError::Validation(rejection_message(&rejection))),
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        JsonRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid JSON request".to_string(),
    }
}

/// Resource id taken from the `{id}` path segment. A segment that is not an
/// `i64` names no row, so it is reported as that entity's 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub i64);

impl<S> FromRequestParts<S> for TeamId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_from_path(parts, state, "Team").await.map(TeamId)
    }
}

impl<S> FromRequestParts<S> for PlayerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_from_path(parts, state, "Player").await.map(PlayerId)
    }
}

async fn id_from_path<S>(parts: &mut Parts, state: &S, entity: &'static str) -> Result<i64, ApiError>
where
    S: Send + Sync,
{
    match Path::<i64>::from_request_parts(parts, state).await {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Unmatched {} id: {}", entity, rejection.body_text());
            Err(ApiError::NotFound(entity))
        }
    }
}
