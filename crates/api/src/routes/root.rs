use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- greets whoever hits the server root.
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Bem-vindo ao meu servidor"))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
