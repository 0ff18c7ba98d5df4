use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::health::handlers;

/// Create the health check route
pub fn routes(service_name: &str) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .with_state(Arc::<str>::from(service_name))
}
