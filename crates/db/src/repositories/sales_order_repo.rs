//! Repository for the `pedido_venda` table.
//!
//! Client and vehicle ids are written as given. A dangling reference is
//! rejected by the schema's foreign keys and surfaces as `Err`.

use async_trait::async_trait;
use dealership_core::resource::Resource;
use dealership_core::types::DbId;

use super::CrudRepo;
use crate::models::sales_order::{SalesOrder, SalesOrderInput};
use crate::DbPool;

const COLUMNS: &str = "id_pedido AS id, id_cliente AS client_id, id_carro AS vehicle_id, \
     data_pedido AS order_date, valor_pedido AS order_value";

#[derive(Clone)]
pub struct SalesOrderRepo {
    pool: DbPool,
}

impl SalesOrderRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepo for SalesOrderRepo {
    type Record = SalesOrder;
    type Input = SalesOrderInput;

    const RESOURCE: Resource = Resource::SalesOrder;

    async fn list(&self) -> Result<Vec<SalesOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pedido_venda");
        sqlx::query_as::<_, SalesOrder>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, input: &SalesOrderInput) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO pedido_venda (id_cliente, id_carro, data_pedido, valor_pedido)
             VALUES ($1, $2, $3, $4)
             RETURNING id_pedido",
        )
        .bind(input.client_id)
        .bind(input.vehicle_id)
        .bind(input.order_date)
        .bind(input.order_value)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: DbId, input: &SalesOrderInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE pedido_venda SET
                id_cliente = $2,
                id_carro = $3,
                data_pedido = $4,
                valor_pedido = $5
             WHERE id_pedido = $1",
        )
        .bind(id)
        .bind(input.client_id)
        .bind(input.vehicle_id)
        .bind(input.order_date)
        .bind(input.order_value)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pedido_venda WHERE id_pedido = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
