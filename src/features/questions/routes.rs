use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
///
/// Paths keep the legacy `/questionsPost` and `/questionsDelete` spellings the
/// frontend calls.
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route("/questions", get(handlers::list_questions))
        .route("/questions/search", post(handlers::search_questions))
        .route("/questionsPost", post(handlers::create_question))
        .route("/questionsDelete/{id}", delete(handlers::delete_question))
        .with_state(service)
}
