use axum::{extract::State, Json};
use std::sync::Arc;

use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get dashboard summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>)
    )
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Json<ApiResponse<DashboardSummaryDto>> {
    Json(ApiResponse::success(Some(service.summary()), None, None))
}
