use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::features::health::dtos::HealthResponseDto;

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(State(service_name): State<Arc<str>>) -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        service: service_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::features::health::routes;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let server = TestServer::new(routes("MineSense Ghana API")).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "MineSense Ghana API");
        assert!(body["timestamp"].is_string());
    }
}
