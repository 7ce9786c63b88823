use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionDto, DeleteQuestionResponseDto,
    QuestionPageResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponseDto),
        (status = 400, description = "Malformed page", body = ErrorResponse),
        (status = 404, description = "No categories exist", body = ErrorResponse),
        (status = 405, description = "Wrong method", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionPageResponseDto>> {
    if !query.is_valid() {
        return Err(AppError::BadRequest(format!(
            "Page must be at least 1, got {}",
            query.page
        )));
    }

    let page = service.list_page(&query).await?;
    Ok(Json(page))
}

/// Delete a question
///
/// Returns the questions still left in `currentCategory` after the delete.
#[utoipa::path(
    delete,
    path = "/questionsDelete/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    request_body = DeleteQuestionDto,
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Invalid body or store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<DeleteQuestionDto>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let response = service.delete(id, dto.current_category).await?;
    Ok(Json(response))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questionsPost",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 422, description = "Missing or invalid fields, or store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let response = service.create(dto).await?;
    Ok(Json(response))
}

/// Search questions by substring
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 404, description = "Nothing matched", body = ErrorResponse),
        (status = 422, description = "Invalid body or store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let response = service.search(&dto.search_term).await?;
    Ok(Json(response))
}
