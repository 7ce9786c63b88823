use async_trait::async_trait;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// Persistence client for the two trivia tables.
///
/// Built once at startup and handed to every feature service, so no handler
/// reaches for a global connection. Every list comes back ordered by `id`.
/// Lookups that may legitimately find nothing return `Option` rather than an
/// error, and the caller decides what an empty result means.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories
    async fn list_categories(&self) -> sqlx::Result<Vec<Category>>;

    /// All questions
    async fn list_questions(&self) -> sqlx::Result<Vec<Question>>;

    /// Questions whose `category` equals `category`
    async fn questions_in_category(&self, category: i32) -> sqlx::Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    async fn search_questions(&self, term: &str) -> sqlx::Result<Vec<Question>>;

    /// Persist a question and return it with its assigned id
    async fn insert_question(&self, question: NewQuestion) -> sqlx::Result<Question>;

    /// Delete a question, returning the removed row if it existed
    async fn delete_question(&self, id: i32) -> sqlx::Result<Option<Question>>;

    /// First question (by id) not listed in `seen`, optionally restricted to a category
    async fn first_unseen_question(
        &self,
        category: Option<i32>,
        seen: &[i32],
    ) -> sqlx::Result<Option<Question>>;
}
