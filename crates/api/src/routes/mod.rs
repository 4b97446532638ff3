pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /produtos                                        list, create
/// /produtos/{id}                                   get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(products::router())
}
