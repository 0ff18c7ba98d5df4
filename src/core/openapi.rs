use utoipa::{Modify, OpenApi};

use crate::features::assistant::{dtos as assistant_dtos, handlers as assistant_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::export::handlers as export_handlers;
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
        // Dashboard (public)
        dashboard_handlers::dashboard_handler::get_summary,
        // Assistant
        assistant_handlers::chat_handler::chat,
        // Export
        export_handlers::export_handler::export_reports,
        // Health
        health_handlers::health_handler::health_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_models::Report,
            reports_models::ReportCategory,
            reports_models::ReportSeverity,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportCreatedDto,
            ApiResponse<reports_dtos::ReportCreatedDto>,
            ApiResponse<Vec<reports_models::Report>>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            dashboard_dtos::HotspotDto,
            dashboard_dtos::CategoryCountDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Assistant
            assistant_dtos::ChatRequestDto,
            assistant_dtos::HistoryEntryDto,
            assistant_dtos::ChatResponseDto,
            // Health
            health_dtos::HealthResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Community grievance reports"),
        (name = "dashboard", description = "Public dashboard statistics"),
        (name = "assistant", description = "Mining law assistant chat"),
        (name = "export", description = "CSV export of reports"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "MineSense Ghana API",
        version = "0.1.0",
        description = "API documentation for MineSense Ghana",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/reports",
            "/api/dashboard/summary",
            "/api/chat",
            "/api/export/reports",
            "/api/health",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Staging");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("staging docs"));
    }
}
