use utoipa::{Modify, OpenApi};

use crate::core::config::ApiDocsConfig;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::search_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        // Quizzes
        quizzes_handlers::next_quiz_question,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesResponseDto,
            categories_dtos::CategoryQuestionsResponseDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionPageResponseDto,
            questions_dtos::DeleteQuestionDto,
            questions_dtos::DeleteQuestionResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::CreateQuestionResponseDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::SearchQuestionsResponseDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizQuestionDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question bank: list, search, create, delete"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "API documentation for the trivia game",
    )
)]
pub struct ApiDoc;

/// Overrides the OpenAPI info block from config
pub struct ApiInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&ApiDocsConfig> for ApiInfoModifier {
    fn from(config: &ApiDocsConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for ApiInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/categories",
            "/categories/{category_id}/questions",
            "/questions",
            "/questions/search",
            "/questionsPost",
            "/questionsDelete/{id}",
            "/quizzes",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        ApiInfoModifier {
            title: "Trivia".to_string(),
            version: "2.0.0".to_string(),
            description: "Staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Trivia");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Staging"));
    }
}
