use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::questions::models::{NewQuestion, Question};

/// Plain record of one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub total_categories: usize,
}

/// Request DTO for `DELETE /questionsDelete/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionDto {
    /// Category whose remaining questions are returned (integer or numeric string)
    #[serde(rename = "currentCategory")]
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub current_category: i32,
}

/// Response DTO for `DELETE /questionsDelete/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    /// Remaining questions in `currentCategory`
    pub questions: Vec<QuestionResponseDto>,
    /// Id of the deleted question
    pub deleted: i32,
    pub total_questions: usize,
}

/// Request DTO for `POST /questionsPost`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,

    /// Category id (integer or numeric string)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub category: i32,

    /// Difficulty score (integer or numeric string)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub difficulty: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Response DTO for `POST /questionsPost`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    pub question: QuestionResponseDto,
}

/// Request DTO for `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response DTO for `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
}
