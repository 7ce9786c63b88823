use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::core::config::DatabaseConfig;
use crate::core::store::TriviaStore;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// PostgreSQL-backed [`TriviaStore`]
///
/// Each call checks a connection out of the pool for the duration of one
/// statement; the connection goes back to the pool when the query future
/// finishes or is dropped.
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> sqlx::Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, "type"
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn list_questions(&self) -> sqlx::Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn questions_in_category(&self, category: i32) -> sqlx::Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_questions(&self, term: &str) -> sqlx::Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_question(&self, question: NewQuestion) -> sqlx::Result<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_question(&self, id: i32) -> sqlx::Result<Option<Question>> {
        // Lookup and delete in one autocommitted statement: the row is gone
        // before the caller re-reads its category.
        sqlx::query_as::<_, Question>(
            r#"
            DELETE FROM questions
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn first_unseen_question(
        &self,
        category: Option<i32>,
        seen: &[i32],
    ) -> sqlx::Result<Option<Question>> {
        match category {
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE NOT (id = ANY($1))
                    ORDER BY id
                    LIMIT 1
                    "#,
                )
                .bind(seen)
                .fetch_optional(&self.pool)
                .await
            }
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = $1 AND NOT (id = ANY($2))
                    ORDER BY id
                    LIMIT 1
                    "#,
                )
                .bind(category)
                .bind(seen)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }
}

/// Escape LIKE metacharacters so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
