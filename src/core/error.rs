use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Any store failure; surfaced to clients as 422, never as a raw 500
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Fixed client-facing message; details only go to the log
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::NotFound(_) => "Resource Not Found",
            AppError::MethodNotAllowed => "Not Allowed",
            AppError::Database(_) | AppError::Unprocessable(_) => "Unprocessable",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            ref other => tracing::debug!("Request failed: {}", other),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(status, self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
