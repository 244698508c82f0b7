//! Client model and DTOs.

use dealership_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cliente` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    /// National tax id (CPF). Stored as typed, no format check.
    #[serde(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// DTO for creating a client or rewriting every column of an existing one.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}
