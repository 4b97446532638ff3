#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use padaria_core::product::Product;
use padaria_core::store::InMemoryProductStore;
use tower::ServiceExt;

use padaria_api::config::{ServerConfig, StoreConfig};
use padaria_api::router::build_app_router;
use padaria_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreConfig::Memory,
    }
}

/// Build the full application router on top of the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<InMemoryProductStore>) -> Router {
    let state = AppState { store };
    build_app_router(state, &test_config())
}

/// A store holding the bakery fixtures used across tests.
pub fn bakery_store() -> Arc<InMemoryProductStore> {
    Arc::new(InMemoryProductStore::with_products([
        Product {
            id: 4,
            nome: "Bolo de Chocolate".to_string(),
        },
        Product {
            id: 7,
            nome: "Pão Francês".to_string(),
        },
    ]))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
