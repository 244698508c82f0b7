//! Route definitions shared by every resource.

use axum::extract::FromRef;
use axum::routing::{delete, get, post, put, MethodRouter};
use axum::Router;
use dealership_db::repositories::CrudRepo;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes for one resource, keyed by its path segment.
///
/// ```text
/// GET    /lista/{segment}            -> list
/// POST   /novo/{segment}             -> create
/// PUT    /atualizar/{segment}/{id}   -> update
/// DELETE /remover/{segment}/{id}     -> remove
/// ```
///
/// Each path also answers with a trailing `/`.
pub fn router<R>() -> Router<AppState>
where
    R: CrudRepo + FromRef<AppState>,
{
    let segment = R::RESOURCE.path_segment();

    let router = Router::new();
    let router = route_both(router, &format!("/lista/{segment}"), get(crud::list::<R>));
    let router = route_both(router, &format!("/novo/{segment}"), post(crud::create::<R>));
    let router = route_both(
        router,
        &format!("/atualizar/{segment}/{{id}}"),
        put(crud::update::<R>),
    );
    route_both(
        router,
        &format!("/remover/{segment}/{{id}}"),
        delete(crud::remove::<R>),
    )
}

/// Register `path` and `path/` with the same handler.
fn route_both(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(&format!("{path}/"), method_router.clone())
        .route(path, method_router)
}
