//! The record store seam.
//!
//! The product table lives in an external persistence service. Every
//! backend (PostgreSQL, hosted REST, in-memory) implements [`ProductStore`];
//! handlers and the deletion operation only see the trait.

mod memory;

use async_trait::async_trait;

use crate::product::{NewProduct, Product};
use crate::types::DbId;

pub use memory::InMemoryProductStore;

/// Failure reported by a record store backend.
///
/// "Row not found" is never an error here: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached (network, pool exhaustion, timeout).
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but refused or failed the operation.
    #[error("Record store error: {0}")]
    Backend(String),
}

/// Operations the record store exposes over the product table.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Look up a product by identifier, selecting at least `id` and `nome`.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError>;

    /// Delete the product with this identifier.
    ///
    /// The store does not report how many rows were affected, so callers
    /// cannot tell a missing row from a deleted one through this call.
    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;

    /// All products ordered by name.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a product and return it with its assigned identifier.
    async fn insert(&self, input: &NewProduct) -> Result<Product, StoreError>;

    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
