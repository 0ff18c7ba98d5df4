use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateReportDto, ReportCreatedDto};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportStore;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a grievance report
///
/// The report is stored in memory with status "Under Review" and the
/// generated reference number is returned.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportCreatedDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(store): State<Arc<ReportStore>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportCreatedDto>>)> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = store.add(dto.into());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(ReportCreatedDto { id: id.clone() }),
            Some(format!(
                "Your grievance has been recorded and will be reviewed by our team. Reference ID: {}",
                id
            )),
            None,
        )),
    ))
}

/// List all reports, most recent first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports", body = ApiResponse<Vec<Report>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(store): State<Arc<ReportStore>>,
) -> Json<ApiResponse<Vec<Report>>> {
    let reports = store.list();
    let total = reports.len() as i64;
    Json(ApiResponse::success(Some(reports), None, Some(Meta { total })))
}
