use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Category id `0` draws from every category. Ids in `previous_questions`
/// are never drawn again.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next unseen question", body = QuizResponseDto),
        (status = 422, description = "No unseen question left, invalid body or store failure", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let response = service.next_question(&request).await?;
    Ok(Json(response))
}
