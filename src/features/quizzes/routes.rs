use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quizzes::handlers;
use crate::features::quizzes::services::QuizService;

pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/quizzes", post(handlers::next_quiz_question))
        .with_state(service)
}
