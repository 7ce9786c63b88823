use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::categories::dtos::{CategoriesResponseDto, CategoryQuestionsResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category labels keyed by id", body = CategoriesResponseDto),
        (status = 422, description = "Store failure", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "No questions in this category", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let questions = service.questions(category_id).await?;
    Ok(Json(questions))
}
