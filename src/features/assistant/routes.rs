use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::assistant::handlers;
use crate::features::assistant::services::ChatGateway;

/// Create routes for the legal assistant
pub fn routes(gateway: Arc<ChatGateway>) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .with_state(gateway)
}
