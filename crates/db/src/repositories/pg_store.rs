use async_trait::async_trait;
use padaria_core::product::{NewProduct, Product};
use padaria_core::store::{ProductStore, StoreError};
use padaria_core::types::DbId;

use super::ProductRepo;
use crate::DbPool;

/// [`ProductStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Connection-level failures are `Unavailable`; everything else the
/// database reported is `Backend`.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreError::Unavailable(err.to_string()),
        other => StoreError::Backend(other.to_string()),
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        ProductRepo::find_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Product::from))
            .map_err(store_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        ProductRepo::delete(&self.pool, id).await.map_err(store_error)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        ProductRepo::list(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(Product::from).collect())
            .map_err(store_error)
    }

    async fn insert(&self, input: &NewProduct) -> Result<Product, StoreError> {
        ProductRepo::create(&self.pool, &input.nome)
            .await
            .map(Product::from)
            .map_err(store_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
