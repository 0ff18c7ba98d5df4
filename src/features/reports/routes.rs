use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportStore;

/// Create routes for the reports feature
///
/// Public: the submission form does not require an account.
pub fn routes(store: Arc<ReportStore>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .with_state(store)
}
