use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use padaria_core::error::CoreError;
use padaria_core::store::StoreError;
use serde_json::json;

/// Message returned for malformed or non-positive identifiers.
pub const INVALID_ID_MESSAGE: &str = "ID deve ser um número válido";

/// Message returned for any server-side failure. Details are only logged.
pub const INTERNAL_MESSAGE: &str = "Erro interno do servidor";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ success: false, message, code }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `padaria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Core(CoreError::Store(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidIdentifier(raw) => {
                    tracing::debug!(raw_id = %raw, "Rejected product identifier");
                    (
                        StatusCode::BAD_REQUEST,
                        "INVALID_IDENTIFIER",
                        INVALID_ID_MESSAGE.to_string(),
                    )
                }
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} não encontrado"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Store(err) => {
                    tracing::error!(error = %err, "Record store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORE_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "success": false,
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
