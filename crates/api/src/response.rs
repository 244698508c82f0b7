//! Shared response body types for API handlers.

use serde::Serialize;

/// The `{ "mensagem": ... }` body returned by every write endpoint and by
/// every failure.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
