//! In-memory [`TriviaStore`] and fixtures for service and HTTP tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::core::app::{create_app, with_http_layers};
use crate::core::config::AppConfig;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{StoreError, StoreResult, TriviaStore};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_category_id: i64,
    next_question_id: i64,
}

/// Store backed by vectors. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryStore {
    pub fn with_categories(labels: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut state = store.state();
            for label in labels {
                state.next_category_id += 1;
                let id = state.next_category_id;
                state.categories.push(Category {
                    id,
                    kind: label.to_string(),
                });
            }
        }
        store
    }

    pub fn insert(&self, new: NewQuestion) -> Question {
        let mut state = self.state();
        state.next_question_id += 1;
        let question = Question {
            id: state.next_question_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        state.questions.push(question.clone());
        question
    }

    /// Make every create/delete fail with [`StoreError::Unavailable`]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every list/search/get fail with [`StoreError::Unavailable`]
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }

    fn check_readable(&self) -> StoreResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check_readable()?;
        Ok(self.state().categories.clone())
    }

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category> {
        self.check_writable()?;
        let mut state = self.state();
        state.next_category_id += 1;
        let created = Category {
            id: state.next_category_id,
            kind: category.kind,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn delete_category(&self, id: i64) -> StoreResult<bool> {
        self.check_writable()?;
        let mut state = self.state();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        Ok(state.categories.len() != before)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.check_readable()?;
        Ok(self.state().questions.clone())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.check_readable()?;
        Ok(self
            .state()
            .questions
            .iter()
            .filter(|q| q.question.contains(term))
            .cloned()
            .collect())
    }

    async fn questions_by_category(&self, category: &str) -> StoreResult<Vec<Question>> {
        self.check_readable()?;
        Ok(self
            .state()
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        self.check_readable()?;
        Ok(self.state().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question> {
        self.check_writable()?;
        Ok(self.insert(question))
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        self.check_writable()?;
        let mut state = self.state();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        Ok(state.questions.len() != before)
    }
}

pub fn question(question: &str, answer: &str, category: &str, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        difficulty,
    }
}

/// Default categories plus `count` generated questions with ids `1..=count`
pub fn seeded_store(count: usize) -> InMemoryStore {
    let store = InMemoryStore::with_categories(&DEFAULT_CATEGORIES);
    for i in 0..count {
        let text: String = Sentence(3..8).fake();
        let answer: String = Word().fake();
        let category = (i % DEFAULT_CATEGORIES.len() + 1).to_string();
        let difficulty = (i % 5) as i32 + 1;
        store.insert(question(&text, &answer, &category, difficulty));
    }
    store
}

/// Full router, including CORS and request-id layers, over `store`
pub fn test_server(store: Arc<InMemoryStore>) -> TestServer {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 5000,
        cors_allowed_origins: vec!["*".to_string()],
    };
    let app = with_http_layers(create_app(store), &config);
    TestServer::new(app).unwrap()
}
