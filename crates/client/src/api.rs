//! HTTP client for the product endpoints.
//!
//! Responses use the `{ "success": bool, "message"?: ..., "produto"?: ... }`
//! envelope; a non-2xx status carries the user-facing `message`.

use async_trait::async_trait;
use padaria_core::product::Product;
use padaria_core::types::DbId;
use serde::Deserialize;

use crate::error::ClientError;

/// The endpoint operations the deletion flow depends on.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `DELETE /api/produtos/{id}`, returning the removed product.
    async fn delete_product(&self, id: DbId) -> Result<Product, ClientError>;

    /// `GET /api/produtos`.
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    produto: Option<Product>,
    #[serde(default)]
    produtos: Option<Vec<Product>>,
}

/// [`ProductsApi`] over HTTP.
pub struct HttpProductsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductsApi {
    /// * `base_url` - Server URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/produtos", self.base_url)
    }

    /// Decode the envelope, turning non-2xx statuses into
    /// [`ClientError::Endpoint`] with the server's message.
    async fn read_envelope(response: reqwest::Response) -> Result<Envelope, ClientError> {
        let status = response.status();
        let text = response.text().await?;
        let envelope = serde_json::from_str::<Envelope>(&text).ok();

        if !status.is_success() {
            let message = envelope
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("Erro {}", status.as_u16()));
            return Err(ClientError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        envelope.ok_or_else(|| ClientError::Endpoint {
            status: status.as_u16(),
            message: "Resposta inválida do servidor".to_string(),
        })
    }
}

fn missing_field(field: &str) -> ClientError {
    ClientError::Endpoint {
        status: 200,
        message: format!("Resposta do servidor sem o campo `{field}`"),
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn delete_product(&self, id: DbId) -> Result<Product, ClientError> {
        let response = self
            .client
            .delete(format!("{}/{id}", self.products_url()))
            .send()
            .await?;

        Self::read_envelope(response)
            .await?
            .produto
            .ok_or_else(|| missing_field("produto"))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.products_url()).send().await?;

        Self::read_envelope(response)
            .await?
            .produtos
            .ok_or_else(|| missing_field("produtos"))
    }
}
