//! Sales order model and DTOs.

use dealership_core::types::{Date, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pedido_venda` table.
///
/// `client_id` and `vehicle_id` are plain foreign keys; the database decides
/// whether they must exist.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SalesOrder {
    #[serde(rename = "idPedidoVenda")]
    pub id: DbId,
    #[serde(rename = "idCliente")]
    pub client_id: DbId,
    #[serde(rename = "idCarro")]
    pub vehicle_id: DbId,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(rename = "dataPedido")]
    pub order_date: Date,
    /// Serialized as a JSON number.
    #[serde(rename = "valorPedido", with = "rust_decimal::serde::float")]
    pub order_value: Decimal,
}

/// DTO for creating a sales order or rewriting every column of an existing one.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesOrderInput {
    #[serde(rename = "idCliente")]
    pub client_id: DbId,
    #[serde(rename = "idCarro")]
    pub vehicle_id: DbId,
    #[serde(rename = "dataPedido")]
    pub order_date: Date,
    #[serde(rename = "valorPedido", with = "rust_decimal::serde::float")]
    pub order_value: Decimal,
}
