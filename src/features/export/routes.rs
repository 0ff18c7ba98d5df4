use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::export::handlers;
use crate::features::reports::services::ReportStore;

/// Create routes for report export
pub fn routes(store: Arc<ReportStore>) -> Router {
    Router::new()
        .route("/api/export/reports", get(handlers::export_reports))
        .with_state(store)
}
