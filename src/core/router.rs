use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Json, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::store::TriviaStore;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Full application router over `store`.
///
/// Unknown paths answer 404 and known paths with the wrong verb answer 405,
/// both with the JSON error body.
pub fn build_router(
    store: Arc<dyn TriviaStore>,
    config: &AppConfig,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service))
        .route("/health", get(health_check))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(openapi) }),
        )
        .method_not_allowed_fallback(|| async { AppError::MethodNotAllowed })
        .fallback(|| async { AppError::NotFound("No route".to_string()) })
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        .layer(middleware::allow_headers_layer())
        .layer(middleware::allow_methods_layer())
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
