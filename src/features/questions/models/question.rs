use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Id of the owning category, as text
    pub category: String,
    pub difficulty: i32,
}

/// Values for a question insert
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}
