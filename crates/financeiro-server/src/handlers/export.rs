//! CSV export handler

use axum::{
    body::Body,
    extract::Request,
    http::{header, Response, StatusCode},
};
use chrono::Utc;
use tracing::info;

use super::{read_json, ReportRequest};
use crate::AppError;
use financeiro_core::{export_file_name, export_transactions_csv, filter_transactions};

/// POST /api/export - Download the filtered transactions as CSV
pub async fn export_csv(request: Request) -> Result<Response<Body>, AppError> {
    let req: ReportRequest = read_json(request).await?;

    let filtered = filter_transactions(&req.transactions, &req.filter);
    let csv = export_transactions_csv(&filtered)?;
    let file_name = export_file_name(Utc::now().date_naive());
    info!("Exporting {} transactions as {}", filtered.len(), file_name);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(Body::from(csv))
        .map_err(AppError::internal)
}
