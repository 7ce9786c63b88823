use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::store::TriviaStore;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};

/// Service drawing the next quiz question
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// First question (by id) in scope that has not been asked yet.
    ///
    /// Deterministic: the same request against the same data always draws the
    /// same question. An exhausted scope is unprocessable.
    pub async fn next_question(&self, request: &QuizRequestDto) -> Result<QuizResponseDto> {
        let scope = request.quiz_category.scope();

        let question = self
            .store
            .first_unseen_question(scope, &request.previous_questions)
            .await
            .map_err(|e| {
                tracing::error!("Failed to draw quiz question: {:?}", e);
                AppError::Database(e)
            })?;

        match question {
            Some(question) => Ok(QuizResponseDto {
                question: question.into(),
            }),
            None => {
                tracing::debug!(
                    "Quiz exhausted: category={:?}, previous={}",
                    scope,
                    request.previous_questions.len()
                );
                Err(AppError::Unprocessable(
                    "No unseen questions left in this category".to_string(),
                ))
            }
        }
    }
}
