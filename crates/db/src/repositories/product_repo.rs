//! Repository for the `produtos` table.

use padaria_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::ProductRow;

/// Column list for `produtos` queries.
const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produtos WHERE id = $1");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produtos ORDER BY nome, id");
        sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a product, returning the stored row.
    pub async fn create(pool: &PgPool, nome: &str) -> Result<ProductRow, sqlx::Error> {
        let query = format!("INSERT INTO produtos (nome) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(nome)
            .fetch_one(pool)
            .await
    }

    /// Delete a product by ID.
    ///
    /// The affected-row count is not returned. Callers confirm existence
    /// with [`ProductRepo::find_by_id`] first, as they do against the
    /// hosted store.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
