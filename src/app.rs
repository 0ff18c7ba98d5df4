//! Service construction and router wiring

use axum::{middleware::from_fn, Router};
use std::sync::{Arc, Weak};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::assistant::{routes as assistant_routes, ChatGateway, OpenAiCompletionClient};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::export::routes as export_routes;
use crate::features::health::routes as health_routes;
use crate::features::reports::models::demo_reports;
use crate::features::reports::{routes as reports_routes, ReportStore};

/// Long-lived services shared by the HTTP handlers
pub struct AppServices {
    pub store: Arc<ReportStore>,
    pub gateway: Arc<ChatGateway>,
    pub dashboard: Arc<DashboardService>,
}

pub fn create_services(config: &Config) -> AppServices {
    let store = if config.app.seed_demo_reports {
        Arc::new(ReportStore::with_seed(demo_reports()))
    } else {
        Arc::new(ReportStore::new())
    };
    tracing::info!("Report store initialized with {} reports", store.len());

    // Held for the life of the process; a weak handle avoids a store -> listener -> store cycle
    let weak_store: Weak<ReportStore> = Arc::downgrade(&store);
    let _activity_log = store.subscribe(move || {
        if let Some(store) = weak_store.upgrade() {
            tracing::info!("Report store changed: total_reports={}", store.len());
        }
    });

    let completion_client = OpenAiCompletionClient::new(&config.assistant);
    if completion_client.is_configured() {
        tracing::info!(
            "Assistant completion client initialized (model: {}, base_url: {})",
            config.assistant.model,
            config.assistant.base_url
        );
    } else {
        tracing::warn!("OPENAI_API_KEY not set. Assistant will answer with fallback responses only.");
    }
    let gateway = Arc::new(ChatGateway::new(Arc::new(completion_client)));

    let dashboard = Arc::new(DashboardService::new(Arc::clone(&store)));
    tracing::info!("Dashboard service initialized");

    AppServices {
        store,
        gateway,
        dashboard,
    }
}

fn swagger_router(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Build the application router with all feature routes and HTTP layers
pub fn create_router(config: &Config, services: &AppServices) -> Router {
    // All routes are public
    let public_routes = Router::new()
        .merge(reports_routes::routes(Arc::clone(&services.store)))
        .merge(export_routes::routes(Arc::clone(&services.store)))
        .merge(dashboard_routes(Arc::clone(&services.dashboard)))
        .merge(assistant_routes::routes(Arc::clone(&services.gateway)))
        .merge(health_routes(&config.app.service_name));

    let router = Router::new()
        .merge(swagger_router(config))
        .merge(public_routes);

    with_http_layers(router, config)
}

/// Wrap `router` in the shared HTTP layers: panic recovery, CORS, request ids and tracing
fn with_http_layers(router: Router, config: &Config) -> Router {
    router
        // Answer a panicking handler with a 500 instead of dropping the connection
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, AssistantConfig, SwaggerConfig};
    use crate::shared::test_helpers::report_form_json;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn test_config(seed_demo_reports: bool, swagger_password: Option<&str>) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
                service_name: "MineSense Ghana API".to_string(),
                seed_demo_reports,
            },
            assistant: AssistantConfig {
                api_key: None,
                base_url: "http://127.0.0.1:9".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                request_timeout: Duration::from_secs(1),
            },
            swagger: SwaggerConfig {
                username: swagger_password.map(|_| "admin".to_string()),
                password: swagger_password.map(str::to_string),
                title: "MineSense Ghana API".to_string(),
                version: "0.1.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server(config: &Config) -> (TestServer, AppServices) {
        let services = create_services(config);
        let server = TestServer::new(create_router(config, &services)).unwrap();
        (server, services)
    }

    #[tokio::test]
    async fn test_submission_flows_into_export_and_dashboard() {
        let (server, services) = server(&test_config(true, None));

        let before: Value = server.get("/api/dashboard/summary").await.json();
        assert_eq!(before["data"]["totalReports"], 4);

        let created: Value = server
            .post("/api/reports")
            .json(&report_form_json())
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(services.store.len(), 5);

        let csv = server.get("/api/export/reports").await.text();
        assert!(csv.split('\n').nth(1).unwrap().starts_with(&format!("{},", id)));

        let after: Value = server.get("/api/dashboard/summary").await.json();
        assert_eq!(after["data"]["totalReports"], 5);
    }

    #[tokio::test]
    async fn test_unseeded_store_starts_empty() {
        let (server, _services) = server(&test_config(false, None));

        let body: Value = server.get("/api/reports").await.json();
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_chat_without_api_key_uses_fallback() {
        let (server, _services) = server(&test_config(true, None));

        let response = server
            .post("/api/chat")
            .json(&json!({ "message": "What are my rights?" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["fallback"], true);
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("Under Ghana's Mining Act"));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let (server, _services) = server(&test_config(true, None));

        let response = server.get("/api/health").await;
        response.assert_status_ok();
        assert!(response.headers().get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_internal_error() {
        async fn failing_export() -> &'static str {
            panic!("export buffer exhausted")
        }

        let config = test_config(true, None);
        let router = with_http_layers(
            Router::new().route("/api/export/failing", axum::routing::get(failing_export)),
            &config,
        );
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/export/failing").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get("x-request-id").is_some());

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (server, _services) = server(&test_config(true, None));

        let doc: Value = server.get("/api-docs/openapi.json").await.json();
        assert!(doc["paths"]["/api/chat"].is_object());
    }

    #[tokio::test]
    async fn test_openapi_document_guarded_when_credentials_set() {
        let (server, _services) = server(&test_config(true, Some("secret")));

        server
            .get("/api-docs/openapi.json")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
