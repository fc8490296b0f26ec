//! Category handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::{read_json, request_taxonomy};
use crate::{AppError, AppState};
use financeiro_core::{default_taxonomy, CategoryTaxonomy, Error as CoreError};

/// GET /api/categories/default - Built-in taxonomy, for first use or reset
pub async fn default_categories() -> Json<CategoryTaxonomy> {
    Json(default_taxonomy().clone())
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: String,
}

/// POST /api/categories/classify - Which category a sentence would get
pub async fn classify_text(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<ClassifyResponse>, AppError> {
    let body: Value = read_json(request).await?;

    let text = body
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or(CoreError::MissingInput)?;
    let taxonomy = request_taxonomy(body.get("categories"))?;
    let taxonomy = taxonomy.as_ref().unwrap_or(&state.taxonomy);

    Ok(Json(ClassifyResponse {
        category: taxonomy.classify(text).to_string(),
    }))
}
