//! Handlers shared by every resource.
//!
//! Each handler is generic over a [`CrudRepo`] and is instantiated once per
//! resource in the route table. The repository is pulled out of
//! [`AppState`](crate::state::AppState) by type.
//!
//! Status mapping:
//! - list: `200` + JSON array, or `400` when the query raised
//! - create/update/remove: `200` + success message, or `400` + the
//!   "rejected" message both when no row was touched and when the statement
//!   raised. The database error is only logged.

use axum::extract::State;
use axum::Json;
use dealership_core::resource::WriteOp;
use dealership_db::repositories::CrudRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RecordId};
use crate::response::MessageResponse;

/// GET /lista/{resource}
pub async fn list<R: CrudRepo>(State(repo): State<R>) -> AppResult<Json<Vec<R::Record>>> {
    let records = repo.list().await.map_err(|source| AppError::Failed {
        message: R::RESOURCE.messages().list_failed,
        source,
    })?;

    tracing::debug!(
        resource = R::RESOURCE.label(),
        count = records.len(),
        "Listed records"
    );

    Ok(Json(records))
}

/// POST /novo/{resource}
pub async fn create<R: CrudRepo>(
    State(repo): State<R>,
    JsonBody(input): JsonBody<R::Input>,
) -> AppResult<Json<MessageResponse>> {
    let result = repo.create(&input).await.map(|id| {
        if let Some(id) = id {
            tracing::info!(resource = R::RESOURCE.label(), id, "Record created");
        }
        id.is_some()
    });

    respond::<R>(WriteOp::Create, result)
}

/// PUT /atualizar/{resource}/{id}
///
/// Rewrites every field; there is no partial update.
pub async fn update<R: CrudRepo>(
    State(repo): State<R>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<R::Input>,
) -> AppResult<Json<MessageResponse>> {
    let result = repo.update(id, &input).await;
    if matches!(result, Ok(true)) {
        tracing::info!(resource = R::RESOURCE.label(), id, "Record updated");
    }

    respond::<R>(WriteOp::Update, result)
}

/// DELETE /remover/{resource}/{id}
pub async fn remove<R: CrudRepo>(
    State(repo): State<R>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    let result = repo.remove(id).await;
    if matches!(result, Ok(true)) {
        tracing::info!(resource = R::RESOURCE.label(), id, "Record removed");
    }

    respond::<R>(WriteOp::Remove, result)
}

/// Map the outcome of a write onto the resource's message catalogue.
fn respond<R: CrudRepo>(
    op: WriteOp,
    result: Result<bool, sqlx::Error>,
) -> AppResult<Json<MessageResponse>> {
    let messages = R::RESOURCE.messages();
    match result {
        Ok(true) => Ok(Json(MessageResponse::new(messages.succeeded(op)))),
        Ok(false) => Err(AppError::Rejected(messages.rejected(op))),
        Err(err) => {
            tracing::error!(
                resource = R::RESOURCE.label(),
                operation = ?op,
                error = %err,
                "Database error during write"
            );
            Err(AppError::Rejected(messages.rejected(op)))
        }
    }
}
