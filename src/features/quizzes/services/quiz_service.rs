use std::sync::Arc;

use crate::core::error::Result;
use crate::features::quizzes::dtos::QuizResponseDto;
use crate::features::quizzes::services::selector::{select_question, QuizCriteria};
use crate::modules::store::TriviaStore;

/// Picks the next question of a quiz round
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn next_question(&self, criteria: &QuizCriteria) -> Result<QuizResponseDto> {
        let questions = match criteria.category() {
            Some(category) => self.store.questions_by_category(category).await?,
            None => self.store.list_questions().await?,
        };

        // ThreadRng is !Send, keep it out of scope of any await
        let question = {
            let mut rng = rand::thread_rng();
            select_question(questions, criteria, &mut rng)
        };

        if question.is_none() {
            tracing::debug!("Quiz round exhausted: category={:?}", criteria.category());
        }

        Ok(QuizResponseDto {
            question: question.map(Into::into),
        })
    }
}
