use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Uniform error body for 400, 404, 405 and 422 responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page selector for the question listing.
///
/// Pages are a fixed `QUESTIONS_PER_PAGE` wide and never checked against the
/// number of rows: a page past the end is simply empty.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageQuery {
    pub fn is_valid(&self) -> bool {
        self.page >= 1
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        usize::try_from(self.page.saturating_sub(1))
            .unwrap_or(0)
            .saturating_mul(self.limit())
    }

    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Cut this page out of the full ordered list
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }
}
