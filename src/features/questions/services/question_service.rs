use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::{
    QuestionCreatedDto, QuestionListDto, QuestionRequestDto, QuestionResponseDto,
    QuestionSearchDto,
};
use crate::modules::store::TriviaStore;
use crate::shared::types::PaginationQuery;

/// Service for question listing, search, create and delete
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of questions ordered by id, plus the category labels.
    /// An empty page is not-found.
    pub async fn list_page(&self, pagination: &PaginationQuery) -> Result<QuestionListDto> {
        let questions = self.store.list_questions().await?;
        let page = pagination.slice(&questions);

        if page.is_empty() {
            return Err(AppError::NotFound(None));
        }

        let categories: Vec<String> = self
            .store
            .list_categories()
            .await?
            .into_iter()
            .map(|c| c.kind)
            .collect();

        Ok(QuestionListDto {
            questions: page.iter().cloned().map(Into::into).collect(),
            total_questions: questions.len(),
            current_category: categories.clone(),
            categories,
        })
    }

    /// Case-sensitive substring search over question text
    pub async fn search(&self, term: &str) -> Result<QuestionSearchDto> {
        let questions = self.store.search_questions(term).await?;

        if questions.is_empty() {
            return Err(AppError::not_found(format!(
                "Question containing \"{}\": No Found.",
                term
            )));
        }

        let questions: Vec<QuestionResponseDto> = questions.into_iter().map(Into::into).collect();

        Ok(QuestionSearchDto {
            total_questions: questions.len(),
            questions,
            current_category: None,
        })
    }

    /// Persist a validated create request
    pub async fn create(&self, dto: QuestionRequestDto) -> Result<QuestionCreatedDto> {
        let question = self
            .store
            .create_question(dto.into_new_question())
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Unprocessable(None)
            })?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        // the row is stored at this point, so a failed count must not fail the request
        let total_questions = match self.store.list_questions().await {
            Ok(questions) => questions.len(),
            Err(e) => {
                tracing::warn!("Failed to count questions after create: {:?}", e);
                0
            }
        };

        Ok(QuestionCreatedDto {
            created: question.id,
            question: question.into(),
            total_questions,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<i64> {
        let missing = || AppError::bad_request(format!("Question ID {}: Not Found", id));

        if self.store.get_question(id).await?.is_none() {
            return Err(missing());
        }

        let deleted = self.store.delete_question(id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable(None)
        })?;

        if !deleted {
            return Err(missing());
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(id)
    }
}
