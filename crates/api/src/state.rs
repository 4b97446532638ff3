use std::sync::Arc;

use padaria_core::store::ProductStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The product record store (PostgreSQL, hosted REST, or in-memory).
    pub store: Arc<dyn ProductStore>,
}
