//! Existence-checked product deletion.
//!
//! The record store's delete does not report affected rows, so a delete of
//! a missing row looks exactly like a successful one. [`delete_product`]
//! looks the row up first and only deletes what it found, which lets the
//! caller distinguish "not found" from "deleted" at the cost of one extra
//! round trip.
//!
//! The lookup and the delete are two independent store calls. A concurrent
//! delete of the same row between them is not detected: both callers may
//! report success.

use crate::error::CoreError;
use crate::identifier::parse_product_id;
use crate::product::Product;
use crate::store::ProductStore;

/// Entity label used in [`CoreError::NotFound`] for products.
pub const PRODUCT_ENTITY: &str = "Produto";

/// Fetch a product by its textual identifier.
///
/// Malformed or non-positive identifiers are rejected before the store is
/// contacted.
pub async fn find_product(store: &dyn ProductStore, raw_id: &str) -> Result<Product, CoreError> {
    let id = parse_product_id(raw_id)?;
    store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PRODUCT_ENTITY,
            id,
        })
}

/// Delete a product by its textual identifier and return what was removed.
///
/// 1. Invalid identifier: [`CoreError::InvalidIdentifier`], store untouched.
/// 2. No matching row: [`CoreError::NotFound`], delete never issued.
/// 3. Lookup or delete failure: [`CoreError::Store`].
pub async fn delete_product(store: &dyn ProductStore, raw_id: &str) -> Result<Product, CoreError> {
    let product = find_product(store, raw_id).await?;
    store.delete_by_id(product.id).await?;
    Ok(product)
}
