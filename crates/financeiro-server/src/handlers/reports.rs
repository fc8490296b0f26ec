//! Dashboard summary handler

use axum::{extract::Request, Json};
use serde::{Deserialize, Serialize};

use super::read_json;
use crate::AppError;
use financeiro_core::{
    distinct_categories, distinct_months, filter_transactions, summarize, Summary, Transaction,
    TransactionFilter,
};

/// Body shared by the summary and export endpoints
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub filter: TransactionFilter,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    /// Filtered, newest first
    pub transactions: Vec<Transaction>,
    /// Picker options over the unfiltered set
    pub categories: Vec<String>,
    pub months: Vec<String>,
}

/// POST /api/summary - Dashboard figures for the filtered transactions
pub async fn summary(request: Request) -> Result<Json<SummaryResponse>, AppError> {
    let req: ReportRequest = read_json(request).await?;

    let filtered = filter_transactions(&req.transactions, &req.filter);
    let summary = summarize(&filtered);

    Ok(Json(SummaryResponse {
        summary,
        categories: distinct_categories(&req.transactions),
        months: distinct_months(&req.transactions),
        transactions: filtered,
    }))
}
