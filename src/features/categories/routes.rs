//! Category routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}
