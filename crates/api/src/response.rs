//! Success envelopes for product endpoints.
//!
//! Successful responses carry `"success": true` next to the payload, the
//! counterpart of the `{ "success": false, "message": ... }` error body
//! produced by [`crate::error::AppError`].

use padaria_core::product::Product;
use serde::Serialize;

/// `{ "success": true, "produto": { "id", "nome" } }`
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub produto: Product,
}

impl ProductResponse {
    pub fn ok(produto: Product) -> Self {
        Self {
            success: true,
            produto,
        }
    }
}

/// `{ "success": true, "produtos": [ ... ] }`
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub produtos: Vec<Product>,
}

impl ProductListResponse {
    pub fn ok(produtos: Vec<Product>) -> Self {
        Self {
            success: true,
            produtos,
        }
    }
}
