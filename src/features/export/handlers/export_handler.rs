use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::features::export::services::reports_to_csv;
use crate::features::reports::services::ReportStore;
use crate::shared::constants::EXPORT_FILENAME;

/// Download all reports as CSV
#[utoipa::path(
    get,
    path = "/api/export/reports",
    responses(
        (status = 200, description = "CSV file of all reports", content_type = "text/csv", body = String)
    ),
    tag = "export"
)]
pub async fn export_reports(State(store): State<Arc<ReportStore>>) -> impl IntoResponse {
    let reports = store.list();
    tracing::info!("Exporting reports as CSV: count={}", reports.len());

    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        reports_to_csv(&reports),
    )
}
