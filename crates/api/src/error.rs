use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dealership_core::error::CoreError;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// A write that touched no row and a write the database refused both end up
/// as [`AppError::Rejected`] with the same message. A listing whose query
/// raised is [`AppError::Failed`]. Every variant, like malformed input, is
/// answered with `400 Bad Request` and a `{ "mensagem": ... }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dealership_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was not valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The write affected no row, or the database refused it.
    #[error("Operation rejected: {0}")]
    Rejected(&'static str),

    /// The listing query itself failed.
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Core(CoreError::InvalidId { raw }) => {
                tracing::warn!(raw = %raw, "Rejected non-numeric identifier");
                format!("Identificador inválido: {raw}")
            }
            AppError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "Rejected request body");
                format!("Requisição inválida: {}", rejection.body_text())
            }
            AppError::Rejected(msg) => {
                tracing::warn!(reason = msg, "Operation affected no rows");
                (*msg).to_string()
            }
            AppError::Failed { message, source } => {
                tracing::error!(error = %source, reason = message, "Database error");
                (*message).to_string()
            }
        };

        (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message))).into_response()
    }
}
