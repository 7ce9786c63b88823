use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use utoipa::ToSchema;

use crate::features::questions::models::Question;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Category selected for the quiz; other keys the client sends are ignored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id, `0` for all categories (integer or numeric string)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
}

impl QuizCategoryDto {
    /// Category filter for the draw, `None` when every category is in play
    pub fn scope(&self) -> Option<i32> {
        (self.id != ALL_CATEGORIES_ID).then_some(self.id)
    }
}

/// Request DTO for `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already asked in this quiz
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategoryDto,
}

/// The drawn question, without its category or difficulty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
}

impl From<Question> for QuizQuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
        }
    }
}

/// Response DTO for `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub question: QuizQuestionDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scope() {
        assert_eq!(QuizCategoryDto { id: 0 }.scope(), None);
        assert_eq!(QuizCategoryDto { id: 3 }.scope(), Some(3));
    }

    #[test]
    fn test_request_tolerates_frontend_shape() {
        let dto: QuizRequestDto = serde_json::from_value(json!({
            "previous_questions": [4, 9],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();

        assert_eq!(dto.previous_questions, vec![4, 9]);
        assert_eq!(dto.quiz_category.scope(), Some(1));
    }

    #[test]
    fn test_previous_questions_default_to_empty() {
        let dto: QuizRequestDto =
            serde_json::from_value(json!({"quiz_category": {"id": 0}})).unwrap();
        assert!(dto.previous_questions.is_empty());
    }
}
