//! Transaction intake handler

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;

use super::{read_json, request_taxonomy};
use crate::{AppError, AppState};
use financeiro_core::{accept, Error as CoreError, Transaction};

/// POST /api/process-transaction - Turn a sentence into a transaction
///
/// Body: `{ "text": "...", "categories": { ... } }`. `text` must be a
/// non-blank string; `categories` falls back to the server taxonomy.
pub async fn process_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Transaction>, AppError> {
    let body: Value = read_json(request).await?;

    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or(CoreError::MissingInput)?;
    let taxonomy = request_taxonomy(body.get("categories"))?;
    let taxonomy = taxonomy.as_ref().unwrap_or(&state.taxonomy);

    let transaction = accept(text, Some(taxonomy), Utc::now())?;
    Ok(Json(transaction))
}
