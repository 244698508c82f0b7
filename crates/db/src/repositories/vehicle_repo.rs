//! Repository for the `carro` table.

use async_trait::async_trait;
use dealership_core::resource::Resource;
use dealership_core::types::DbId;

use super::CrudRepo;
use crate::models::vehicle::{Vehicle, VehicleInput};
use crate::DbPool;

const COLUMNS: &str = "id_carro AS id, marca AS brand, modelo AS model, ano AS year, cor AS color";

#[derive(Clone)]
pub struct VehicleRepo {
    pool: DbPool,
}

impl VehicleRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepo for VehicleRepo {
    type Record = Vehicle;
    type Input = VehicleInput;

    const RESOURCE: Resource = Resource::Vehicle;

    async fn list(&self) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carro");
        sqlx::query_as::<_, Vehicle>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, input: &VehicleInput) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO carro (marca, modelo, ano, cor)
             VALUES ($1, $2, $3, $4)
             RETURNING id_carro",
        )
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.color)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: DbId, input: &VehicleInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE carro SET
                marca = $2,
                modelo = $3,
                ano = $4,
                cor = $5
             WHERE id_carro = $1",
        )
        .bind(id)
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.color)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carro WHERE id_carro = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
