//! Handlers for the product endpoints.
//!
//! Identifiers are extracted from the path as raw strings and parsed by
//! `padaria_core`. Path rejections (e.g. invalid percent-encoding) are
//! mapped to the same invalid-identifier 400 body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use padaria_core::deletion;
use padaria_core::error::CoreError;
use padaria_core::product::NewProduct;

use crate::error::{AppError, AppResult};
use crate::response::{ProductListResponse, ProductResponse};
use crate::state::AppState;

/// GET /api/produtos
///
/// List all products ordered by name.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let produtos = state.store.list().await?;

    Ok(Json(ProductListResponse::ok(produtos)))
}

/// POST /api/produtos
///
/// Create a product from `{ "nome": ... }`.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = input.normalized()?;

    let produto = state.store.insert(&input).await?;

    tracing::info!(product_id = produto.id, nome = %produto.nome, "Product created");

    Ok((StatusCode::CREATED, Json(ProductResponse::ok(produto))))
}

/// GET /api/produtos/:id
///
/// Retrieve a single product.
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let raw_id = raw_path_id(path)?;
    let produto = deletion::find_product(state.store.as_ref(), &raw_id).await?;

    Ok(Json(ProductResponse::ok(produto)))
}

/// DELETE /api/produtos/:id
///
/// Confirm the product exists, delete it, and return the removed record.
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let raw_id = raw_path_id(path)?;
    let produto = deletion::delete_product(state.store.as_ref(), &raw_id).await?;

    tracing::info!(product_id = produto.id, nome = %produto.nome, "Product deleted");

    Ok(Json(ProductResponse::ok(produto)))
}

/// Unwrap the raw `{id}` segment, turning a path rejection into
/// [`CoreError::InvalidIdentifier`].
fn raw_path_id(path: Result<Path<String>, PathRejection>) -> Result<String, CoreError> {
    path.map(|Path(raw_id)| raw_id)
        .map_err(|rejection| CoreError::InvalidIdentifier(rejection.body_text()))
}
