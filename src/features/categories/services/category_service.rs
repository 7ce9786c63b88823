use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::store::TriviaStore;
use crate::features::categories::dtos::{CategoriesResponseDto, CategoryQuestionsResponseDto};

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All categories as an id → label map
    pub async fn list(&self) -> Result<CategoriesResponseDto> {
        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into())
    }

    /// Questions filed under `category_id`; an empty category is not found
    pub async fn questions(&self, category_id: i32) -> Result<CategoryQuestionsResponseDto> {
        let questions = self
            .store
            .questions_in_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions for category: {:?}", e);
                AppError::Database(e)
            })?;

        let current_category = questions
            .first()
            .map(|q| q.category)
            .ok_or_else(|| {
                AppError::NotFound(format!("No questions in category {}", category_id))
            })?;

        Ok(CategoryQuestionsResponseDto {
            success: true,
            total_questions: questions.len(),
            current_category,
            questions: questions.into_iter().map(|q| q.into()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_store, MemoryStore};

    #[tokio::test]
    async fn test_list_empty_store_is_not_an_error() {
        let service = CategoryService::new(Arc::new(MemoryStore::new()));

        let response = service.list().await.unwrap();
        assert_eq!(response.total_categories, 0);
        assert!(response.categories.is_empty());
    }

    #[tokio::test]
    async fn test_questions_reports_first_match_category() {
        let service = CategoryService::new(Arc::new(sample_store()));

        let response = service.questions(1).await.unwrap();
        assert_eq!(response.total_questions, 2);
        assert_eq!(response.current_category, 1);
        assert!(response.questions.iter().all(|q| q.category == 1));
    }

    #[tokio::test]
    async fn test_questions_unknown_category_not_found() {
        let service = CategoryService::new(Arc::new(sample_store()));

        let err = service.questions(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
