pub mod health;
pub mod resource;
pub mod root;

use axum::Router;
use dealership_db::repositories::{ClientRepo, SalesOrderRepo, VehicleRepo};

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                    welcome message
///
/// /lista/clientes                      list clients (GET)
/// /novo/clientes                       create client (POST)
/// /atualizar/clientes/{id}             rewrite client (PUT)
/// /remover/clientes/{id}               delete client (DELETE)
///
/// /lista/carros                        list vehicles (GET)
/// /novo/carros                         create vehicle (POST)
/// /atualizar/carros/{id}               rewrite vehicle (PUT)
/// /remover/carros/{id}                 delete vehicle (DELETE)
///
/// /lista/pedidos                       list sales orders (GET)
/// /novo/pedidos                        create sales order (POST)
/// /atualizar/pedidos/{id}              rewrite sales order (PUT)
/// /remover/pedidos/{id}                delete sales order (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(resource::router::<ClientRepo>())
        .merge(resource::router::<VehicleRepo>())
        .merge(resource::router::<SalesOrderRepo>())
}
