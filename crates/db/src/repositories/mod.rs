//! Repository layer.
//!
//! Each repository owns a handle to the shared pool, injected at
//! construction, and implements [`CrudRepo`] for one table. Every statement
//! binds its values as parameters and auto-commits on its own.

use async_trait::async_trait;
use dealership_core::resource::Resource;
use dealership_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod client_repo;
pub mod sales_order_repo;
pub mod vehicle_repo;

pub use client_repo::ClientRepo;
pub use sales_order_repo::SalesOrderRepo;
pub use vehicle_repo::VehicleRepo;

/// List/create/update/remove over a single table.
///
/// Writes report whether a row was touched rather than erroring on a miss:
/// an update or delete aimed at an absent id returns `Ok(false)`, exactly
/// like any other zero-row write. `Err` is reserved for statements that
/// raised.
#[async_trait]
pub trait CrudRepo: Clone + Send + Sync + 'static {
    /// Row as returned to callers.
    type Record: Serialize + Send + Sync + 'static;
    /// Payload accepted by `create` and `update`.
    type Input: DeserializeOwned + Send + Sync + 'static;

    const RESOURCE: Resource;

    /// Every row, in whatever order the database returns them.
    async fn list(&self) -> Result<Vec<Self::Record>, sqlx::Error>;

    /// Insert a row. Returns the assigned id, or `None` if nothing was inserted.
    async fn create(&self, input: &Self::Input) -> Result<Option<DbId>, sqlx::Error>;

    /// Rewrite every column of the row with the given id.
    async fn update(&self, id: DbId, input: &Self::Input) -> Result<bool, sqlx::Error>;

    /// Permanently delete the row with the given id.
    async fn remove(&self, id: DbId) -> Result<bool, sqlx::Error>;
}
