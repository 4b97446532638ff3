use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ProductStore, StoreError};
use crate::product::{NewProduct, Product};
use crate::types::DbId;

/// Process-local store, used for tests and the `memory` backend.
///
/// Counts lookups and deletes so callers can assert which store operations
/// a request reached, and can be switched into failure modes to exercise
/// server-error paths.
#[derive(Default)]
pub struct InMemoryProductStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<DbId, String>,
    last_id: DbId,
    lookups: usize,
    deletes: usize,
    fail_lookups: bool,
    fail_deletes: bool,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with rows that keep their given identifiers.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut inner = Inner::default();
        for p in products {
            inner.last_id = inner.last_id.max(p.id);
            inner.rows.insert(p.id, p.nome);
        }
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Number of `find_by_id` calls received.
    pub async fn lookup_count(&self) -> usize {
        self.inner.lock().await.lookups
    }

    /// Number of `delete_by_id` calls received.
    pub async fn delete_count(&self) -> usize {
        self.inner.lock().await.deletes
    }

    /// Make every subsequent lookup fail with [`StoreError::Unavailable`].
    pub async fn fail_lookups(&self) {
        self.inner.lock().await.fail_lookups = true;
    }

    /// Make every subsequent delete fail with [`StoreError::Backend`].
    pub async fn fail_deletes(&self) {
        self.inner.lock().await.fail_deletes = true;
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.lookups += 1;
        if inner.fail_lookups {
            return Err(StoreError::Unavailable("lookup failure injected".into()));
        }
        Ok(inner.rows.get(&id).map(|nome| Product {
            id,
            nome: nome.clone(),
        }))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.deletes += 1;
        if inner.fail_deletes {
            return Err(StoreError::Backend("delete failure injected".into()));
        }
        inner.rows.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.lock().await;
        let mut products: Vec<Product> = inner
            .rows
            .iter()
            .map(|(id, nome)| Product {
                id: *id,
                nome: nome.clone(),
            })
            .collect();
        products.sort_by(|a, b| a.nome.cmp(&b.nome).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn insert(&self, input: &NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, input.nome.clone());
        Ok(Product {
            id,
            nome: input.nome.clone(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
