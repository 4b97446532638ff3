//! HTTP-level integration tests for the `/api/produtos` endpoints.
//!
//! Requests go straight into the router through `tower::ServiceExt`, backed
//! by the in-memory store so each test can assert which store operations a
//! request reached.

mod common;

use axum::http::StatusCode;
use common::{bakery_store, body_json, build_test_app, delete, get, post_json};

// ---------------------------------------------------------------------------
// DELETE /api/produtos/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_existing_product_returns_it_then_get_is_404() {
    let store = bakery_store();
    let app = build_test_app(store.clone());

    let response = delete(app.clone(), "/api/produtos/4").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["produto"]["id"], 4);
    assert_eq!(json["produto"]["nome"], "Bolo de Chocolate");

    let response = get(app, "/api/produtos/4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Produto não encontrado");
}

#[tokio::test]
async fn delete_non_numeric_id_is_400_and_store_untouched() {
    let store = bakery_store();
    let app = build_test_app(store.clone());

    let response = delete(app, "/api/produtos/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "ID deve ser um número válido");
    assert_eq!(json["code"], "INVALID_IDENTIFIER");

    assert_eq!(store.lookup_count().await, 0);
    assert_eq!(store.delete_count().await, 0);
}

#[tokio::test]
async fn delete_non_positive_ids_are_400() {
    let store = bakery_store();

    for uri in ["/api/produtos/0", "/api/produtos/-4", "/api/produtos/4.0"] {
        let response = delete(build_test_app(store.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }

    assert_eq!(store.delete_count().await, 0);
}

#[tokio::test]
async fn badly_encoded_id_is_400_with_json_body() {
    let store = bakery_store();

    for response in [
        delete(build_test_app(store.clone()), "/api/produtos/%FF").await,
        get(build_test_app(store.clone()), "/api/produtos/%FF").await,
    ] {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "ID deve ser um número válido");
        assert_eq!(json["code"], "INVALID_IDENTIFIER");
    }

    assert_eq!(store.lookup_count().await, 0);
    assert_eq!(store.delete_count().await, 0);
}

#[tokio::test]
async fn delete_missing_product_is_404_without_delete_call() {
    let store = bakery_store();
    let app = build_test_app(store.clone());

    let response = delete(app, "/api/produtos/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Produto não encontrado");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(store.lookup_count().await, 1);
    assert_eq!(store.delete_count().await, 0);
}

#[tokio::test]
async fn delete_twice_reports_404_the_second_time() {
    let store = bakery_store();
    let app = build_test_app(store.clone());

    assert_eq!(
        delete(app.clone(), "/api/produtos/7").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        delete(app, "/api/produtos/7").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(store.delete_count().await, 1);
}

#[tokio::test]
async fn store_lookup_failure_is_500_with_sanitized_message() {
    let store = bakery_store();
    store.fail_lookups().await;
    let app = build_test_app(store.clone());

    let response = delete(app, "/api/produtos/4").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "STORE_ERROR");
    assert_eq!(json["message"], "Erro interno do servidor");
    assert!(!json.to_string().contains("injected"));
    assert_eq!(store.delete_count().await, 0);
}

#[tokio::test]
async fn store_delete_failure_is_500_and_row_survives() {
    let store = bakery_store();
    store.fail_deletes().await;
    let app = build_test_app(store.clone());

    let response = delete(app.clone(), "/api/produtos/4").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = get(app, "/api/produtos/4").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// GET /api/produtos, GET /api/produtos/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_products_ordered_by_name() {
    let app = build_test_app(bakery_store());

    let response = get(app, "/api/produtos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let names: Vec<&str> = json["produtos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bolo de Chocolate", "Pão Francês"]);
}

#[tokio::test]
async fn get_invalid_id_is_400() {
    let store = bakery_store();
    let app = build_test_app(store.clone());

    let response = get(app, "/api/produtos/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.lookup_count().await, 0);
}

// ---------------------------------------------------------------------------
// POST /api/produtos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_id_and_trims_name() {
    let app = build_test_app(bakery_store());

    let response = post_json(
        app.clone(),
        "/api/produtos",
        serde_json::json!({ "nome": "  Sonho  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["produto"]["nome"], "Sonho");
    let id = json["produto"]["id"].as_i64().unwrap();
    assert_eq!(id, 8);

    let response = get(app, &format!("/api/produtos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_with_blank_name_is_400() {
    let app = build_test_app(bakery_store());

    let response = post_json(app, "/api/produtos", serde_json::json!({ "nome": " " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Nome do produto é obrigatório");
}

#[tokio::test]
async fn create_with_malformed_body_is_400() {
    let app = build_test_app(bakery_store());

    let response = post_json(app, "/api/produtos", serde_json::json!({ "name": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}
