//! Repository for the `cliente` table.

use async_trait::async_trait;
use dealership_core::resource::Resource;
use dealership_core::types::DbId;

use super::CrudRepo;
use crate::models::client::{Client, ClientInput};
use crate::DbPool;

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "id_cliente AS id, nome AS name, cpf AS tax_id, telefone AS phone";

/// Provides CRUD operations for clients.
#[derive(Clone)]
pub struct ClientRepo {
    pool: DbPool,
}

impl ClientRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepo for ClientRepo {
    type Record = Client;
    type Input = ClientInput;

    const RESOURCE: Resource = Resource::Client;

    async fn list(&self) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cliente");
        sqlx::query_as::<_, Client>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, input: &ClientInput) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO cliente (nome, cpf, telefone)
             VALUES ($1, $2, $3)
             RETURNING id_cliente",
        )
        .bind(&input.name)
        .bind(&input.tax_id)
        .bind(&input.phone)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: DbId, input: &ClientInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cliente SET
                nome = $2,
                cpf = $3,
                telefone = $4
             WHERE id_cliente = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.tax_id)
        .bind(&input.phone)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cliente WHERE id_cliente = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
