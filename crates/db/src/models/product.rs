//! Row type for the `produtos` table.

use chrono::{DateTime, Utc};
use padaria_core::product::Product;
use padaria_core::types::DbId;
use sqlx::FromRow;

/// A row from the `produtos` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            nome: row.nome,
        }
    }
}
