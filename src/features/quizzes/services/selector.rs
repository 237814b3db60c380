use std::collections::HashSet;

use rand::Rng;

use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::QuizRequestDto;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// What the next quiz question may be drawn from
#[derive(Debug, Clone, Default)]
pub struct QuizCriteria {
    category: Option<String>,
    previous: HashSet<i64>,
}

impl QuizCriteria {
    pub fn new(category: Option<String>, previous: &[i64]) -> Self {
        Self {
            category: category.filter(|id| id != ALL_CATEGORIES_ID),
            previous: previous.iter().copied().collect(),
        }
    }

    /// Category filter, `None` for all categories
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn admits(&self, question: &Question) -> bool {
        let in_category = self
            .category
            .as_deref()
            .map_or(true, |category| question.category == category);

        in_category && !self.previous.contains(&question.id)
    }
}

impl From<QuizRequestDto> for QuizCriteria {
    fn from(dto: QuizRequestDto) -> Self {
        Self::new(
            dto.quiz_category.map(|c| c.id),
            &dto.previous_questions.unwrap_or_default(),
        )
    }
}

/// Draw one admitted question uniformly at random; `None` once the round is
/// exhausted.
pub fn select_question<R>(
    questions: Vec<Question>,
    criteria: &QuizCriteria,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<Question> = questions
        .into_iter()
        .filter(|q| criteria.admits(q))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
