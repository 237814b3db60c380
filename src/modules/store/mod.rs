//! Persistence for categories and questions.
//!
//! Services depend on [`TriviaStore`] rather than on a pool so the same
//! handlers run against PostgreSQL in production and an in-memory store in
//! tests.

pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::{Category, NewCategory};
use crate::features::questions::models::{NewQuestion, Question};

pub use postgres::PgTriviaStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category>;

    /// Returns false when no category had this id
    async fn delete_category(&self, id: i64) -> StoreResult<bool>;

    /// All questions ordered by id
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term` (case-sensitive), ordered by id
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Questions in `category`, ordered by id
    async fn questions_by_category(&self, category: &str) -> StoreResult<Vec<Question>>;

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Returns false when no question had this id
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}

/// Escape `LIKE` wildcards so `term` matches literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("title"), "%title%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }
}
