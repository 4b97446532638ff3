//! REST client for a hosted PostgREST-style record store.
//!
//! Rows are addressed with PostgREST filters (`?id=eq.4`) under
//! `/rest/v1/<table>`. Authentication sends the project key both as the
//! `apikey` header and as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use padaria_core::product::{NewProduct, Product};
use padaria_core::store::{ProductStore, StoreError};
use padaria_core::types::DbId;
use serde::Serialize;

/// Table holding the product rows.
const TABLE: &str = "produtos";

/// Columns selected on every read.
const SELECT: &str = "id,nome";

/// HTTP request timeout for a single store call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the hosted store HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum RestStoreError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Record store API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<RestStoreError> for StoreError {
    fn from(err: RestStoreError) -> Self {
        match &err {
            RestStoreError::Request(e) if e.is_connect() || e.is_timeout() => {
                StoreError::Unavailable(err.to_string())
            }
            RestStoreError::ApiError { status, .. } if *status >= 500 => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct InsertRow<'a> {
    nome: &'a str,
}

/// [`ProductStore`] backed by a hosted REST record store.
pub struct RestProductStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestProductStore {
    /// Create a store client.
    ///
    /// * `base_url` - Project URL, e.g. `https://xyz.supabase.co`.
    /// * `api_key` - Project API key.
    pub fn new(base_url: &str, api_key: String) -> Result<Self, RestStoreError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create a store client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}", self.base_url)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn fetch_rows(&self, query: &[(&str, String)]) -> Result<Vec<Product>, RestStoreError> {
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(query)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Vec<Product>>().await?)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`RestStoreError::ApiError`] with the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RestStoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Record store request failed");
            return Err(RestStoreError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// PostgREST equality filter on the primary key.
fn id_filter(id: DbId) -> (&'static str, String) {
    ("id", format!("eq.{id}"))
}

#[async_trait]
impl ProductStore for RestProductStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let rows = self
            .fetch_rows(&[id_filter(id), ("select", SELECT.to_string())])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        tracing::debug!(product_id = id, "Deleting product from hosted store");
        let response = self
            .authorized(self.client.delete(self.table_url()))
            .query(&[id_filter(id)])
            .send()
            .await
            .map_err(RestStoreError::from)?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = self
            .fetch_rows(&[
                ("select", SELECT.to_string()),
                ("order", "nome.asc,id.asc".to_string()),
            ])
            .await?;
        Ok(rows)
    }

    async fn insert(&self, input: &NewProduct) -> Result<Product, StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .query(&[("select", SELECT)])
            .header("Prefer", "return=representation")
            .json(&[InsertRow { nome: &input.nome }])
            .send()
            .await
            .map_err(RestStoreError::from)?;

        let response = Self::ensure_success(response).await?;
        let rows = response
            .json::<Vec<Product>>()
            .await
            .map_err(RestStoreError::from)?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Backend("insert returned no representation".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fetch_rows(&[("select", SELECT.to_string()), ("limit", "1".to_string())])
            .await?;
        Ok(())
    }
}
