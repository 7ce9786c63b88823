use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Fields of a question that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
