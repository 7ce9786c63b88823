use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::store::TriviaStore;
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionPageResponseDto, QuestionResponseDto, SearchQuestionsResponseDto,
};
use crate::shared::types::PageQuery;

/// Service for listing, searching, creating and deleting questions
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of the full question list.
    ///
    /// Answers not found when there are no categories at all, whatever the
    /// question table holds.
    pub async fn list_page(&self, page: &PageQuery) -> Result<QuestionPageResponseDto> {
        let questions = self.store.list_questions().await.map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })?;

        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories".to_string()));
        }

        let records: Vec<QuestionResponseDto> = questions.into_iter().map(|q| q.into()).collect();
        let total_questions = records.len();

        Ok(QuestionPageResponseDto {
            success: true,
            questions: page.slice(records),
            total_questions,
            total_categories: categories.len(),
        })
    }

    /// Delete a question, then return what is left in `current_category`
    pub async fn delete(&self, id: i32, current_category: i32) -> Result<DeleteQuestionResponseDto> {
        let deleted = self
            .store
            .delete_question(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

        tracing::info!(
            "Question deleted: id={}, category={}",
            deleted.id,
            deleted.category
        );

        let remaining = self
            .store
            .questions_in_category(current_category)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions after delete: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(DeleteQuestionResponseDto {
            success: true,
            total_questions: remaining.len(),
            questions: remaining.into_iter().map(|q| q.into()).collect(),
            deleted: deleted.id,
        })
    }

    pub async fn create(&self, dto: CreateQuestionDto) -> Result<CreateQuestionResponseDto> {
        let question = self
            .store
            .insert_question(dto.into())
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Question created: id={}, category={}, difficulty={}",
            question.id,
            question.category,
            question.difficulty
        );

        Ok(CreateQuestionResponseDto {
            success: true,
            question: question.into(),
        })
    }

    /// Case-insensitive substring search over question text
    pub async fn search(&self, term: &str) -> Result<SearchQuestionsResponseDto> {
        let matches = self.store.search_questions(term).await.map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        if matches.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions matching '{}'",
                term
            )));
        }

        Ok(SearchQuestionsResponseDto {
            success: true,
            total_questions: matches.len(),
            questions: matches.into_iter().map(|q| q.into()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_store, MemoryStore};

    fn store_with(count: usize) -> MemoryStore {
        (0..count).fold(MemoryStore::new().with_category(1, "Science"), |store, n| {
            store.with_question(1, &format!("Question number {}", n + 1), "Answer")
        })
    }

    #[tokio::test]
    async fn test_list_page_slices_ten_at_a_time() {
        let service = QuestionService::new(Arc::new(store_with(23)));

        let first = service.list_page(&PageQuery { page: 1 }).await.unwrap();
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.questions[0].id, 1);
        assert_eq!(first.total_questions, 23);
        assert_eq!(first.total_categories, 1);

        let third = service.list_page(&PageQuery { page: 3 }).await.unwrap();
        let ids: Vec<i32> = third.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[tokio::test]
    async fn test_list_page_past_the_end_is_empty_success() {
        let service = QuestionService::new(Arc::new(store_with(5)));

        let page = service.list_page(&PageQuery { page: 9 }).await.unwrap();
        assert!(page.success);
        assert!(page.questions.is_empty());
        assert_eq!(page.total_questions, 5);
    }

    #[tokio::test]
    async fn test_list_page_without_categories_not_found() {
        let store = MemoryStore::new().with_question(1, "Orphan question?", "Yes");
        let service = QuestionService::new(Arc::new(store));

        let err = service.list_page(&PageQuery::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_remaining_in_given_category() {
        let store = Arc::new(sample_store());
        let service = QuestionService::new(store.clone());

        let response = service.delete(1, 1).await.unwrap();
        assert_eq!(response.deleted, 1);
        assert_eq!(response.total_questions, 1);
        assert_eq!(response.questions[0].id, 2);
        assert_eq!(store.question_ids(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_delete_uses_caller_category_not_deleted_rows() {
        let service = QuestionService::new(Arc::new(sample_store()));

        let response = service.delete(1, 2).await.unwrap();
        let ids: Vec<i32> = response.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn test_delete_missing_question_not_found() {
        let service = QuestionService::new(Arc::new(sample_store()));

        let err = service.delete(99, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = QuestionService::new(Arc::new(sample_store()));

        let response = service.search("PENICILLIN").await.unwrap();
        assert_eq!(response.total_questions, 1);
        assert_eq!(response.questions[0].answer, "Alexander Fleming");
    }

    #[tokio::test]
    async fn test_search_without_matches_not_found() {
        let service = QuestionService::new(Arc::new(sample_store()));

        let err = service.search("volcano").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_failure_becomes_database_error() {
        let store = Arc::new(sample_store());
        store.set_failing(true);
        let service = QuestionService::new(store);

        let err = service.search("organ").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
