use std::sync::Arc;

use axum::extract::FromRef;
use dealership_db::repositories::{ClientRepo, SalesOrderRepo, VehicleRepo};
use dealership_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Each repository holds a clone of the same pool. Generic handlers pull the
/// repository they need out of the state through [`FromRef`].
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub clients: ClientRepo,
    pub vehicles: VehicleRepo,
    pub sales_orders: SalesOrderRepo,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            clients: ClientRepo::new(pool.clone()),
            vehicles: VehicleRepo::new(pool.clone()),
            sales_orders: SalesOrderRepo::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
