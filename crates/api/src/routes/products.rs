//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes, relative to `/api`.
///
/// ```text
/// GET    /produtos        -> list_products
/// POST   /produtos        -> create_product
/// GET    /produtos/{id}   -> get_product
/// DELETE /produtos/{id}   -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/produtos",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/produtos/{id}",
            get(products::get_product).delete(products::delete_product),
        )
}
