//! Vehicle model and DTOs.

use dealership_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `carro` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Vehicle {
    #[serde(rename = "idCarro")]
    pub id: DbId,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}

/// DTO for creating a vehicle or rewriting every column of an existing one.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleInput {
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}
