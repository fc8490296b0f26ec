//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod categories;
pub mod export;
pub mod reports;
pub mod transactions;

// Re-export all handlers for use in router
pub use categories::*;
pub use export::*;
pub use reports::*;
pub use transactions::*;

use axum::{extract::Request, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{AppError, MAX_BODY_SIZE};
use financeiro_core::CategoryTaxonomy;

/// GET /api/health - Liveness check
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Read and parse a JSON request body
pub(crate) async fn read_json<T: DeserializeOwned>(request: Request) -> Result<T, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Corpo da requisição inválido"))?;
    serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("JSON inválido"))
}

/// Taxonomy sent by the client, or the server's own when absent or null
pub(crate) fn request_taxonomy(
    value: Option<&Value>,
) -> Result<Option<CategoryTaxonomy>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|_| AppError::bad_request("Categorias inválidas")),
    }
}
