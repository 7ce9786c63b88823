use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum_test::TestServer;
use utoipa::OpenApi;

use crate::core::config::AppConfig;
use crate::core::openapi::ApiDoc;
use crate::core::router::build_router;
use crate::core::store::TriviaStore;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// In-memory [`TriviaStore`] with the same ordering rules as the SQL one
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_id: i32,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: i32, label: &str) -> Self {
        self.lock().categories.push(Category {
            id,
            category_type: label.to_string(),
        });
        self
    }

    pub fn with_question(self, category: i32, question: &str, answer: &str) -> Self {
        {
            let mut state = self.lock();
            state.last_id += 1;
            let id = state.last_id;
            state.questions.push(Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty: 1,
            });
        }
        self
    }

    /// Make every subsequent call fail the way a dropped connection would
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn question_ids(&self) -> Vec<i32> {
        self.lock().questions.iter().map(|q| q.id).collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    fn checked(&self) -> sqlx::Result<MutexGuard<'_, MemoryState>> {
        let state = self.lock();
        if state.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state)
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> sqlx::Result<Vec<Category>> {
        let mut categories = self.checked()?.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn list_questions(&self) -> sqlx::Result<Vec<Question>> {
        Ok(self.checked()?.questions.clone())
    }

    async fn questions_in_category(&self, category: i32) -> sqlx::Result<Vec<Question>> {
        Ok(self
            .checked()?
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> sqlx::Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .checked()?
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> sqlx::Result<Question> {
        let mut state = self.checked()?;
        state.last_id += 1;
        let stored = Question {
            id: state.last_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        state.questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i32) -> sqlx::Result<Option<Question>> {
        let mut state = self.checked()?;
        let position = state.questions.iter().position(|q| q.id == id);
        Ok(position.map(|index| state.questions.remove(index)))
    }

    async fn first_unseen_question(
        &self,
        category: Option<i32>,
        seen: &[i32],
    ) -> sqlx::Result<Option<Question>> {
        Ok(self
            .checked()?
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .find(|q| !seen.contains(&q.id))
            .cloned())
    }
}

/// Categories {1: Science, 2: Art}; questions 1 and 2 in Science, 3 in Art
pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_question(1, "What is the heaviest organ in the human body?", "The Liver")
        .with_question(1, "Who discovered penicillin?", "Alexander Fleming")
        .with_question(2, "La Giaconda is better known as what?", "Mona Lisa")
}

pub fn test_server(store: Arc<MemoryStore>) -> TestServer {
    let router = build_router(store, &AppConfig::default(), ApiDoc::openapi());
    TestServer::new(router).unwrap()
}
