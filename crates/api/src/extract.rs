//! Request extractors whose rejections use the API's `{ "mensagem": ... }`
//! error body instead of Axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use dealership_core::error::CoreError;
use dealership_core::types::{parse_id, DbId};

use crate::error::AppError;

/// Record identifier taken from the single `{id}` path parameter.
///
/// A non-numeric segment is rejected before any SQL runs.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                return Err(AppError::Core(CoreError::InvalidId {
                    raw: rejection.body_text(),
                }))
            }
        };

        Ok(RecordId(parse_id(&raw)?))
    }
}

/// JSON request body. Missing fields, wrong types and bad content types all
/// become `400` with a `mensagem`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
