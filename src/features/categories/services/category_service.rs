use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryCreatedDto, CategoryListDto, CategoryQuestionsDto, CreateCategoryDto,
};
use crate::features::categories::models::NewCategory;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Labels of every category; not-found when there are none
    pub async fn list(&self) -> Result<CategoryListDto> {
        let categories = self.store.list_categories().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound(None));
        }

        Ok(CategoryListDto {
            categories: categories.into_iter().map(|c| c.kind).collect(),
        })
    }

    /// Create a category from an already validated DTO
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryCreatedDto> {
        let kind = dto.kind.unwrap_or_default();

        let category = self
            .store
            .create_category(NewCategory { kind })
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Unprocessable(None)
            })?;

        tracing::info!("Category created: id={}, type={}", category.id, category.kind);

        Ok(CategoryCreatedDto {
            created: category.id,
            category: category.into(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<i64> {
        let deleted = self.store.delete_category(id).await.map_err(|e| {
            tracing::error!("Failed to delete category {}: {:?}", id, e);
            AppError::Unprocessable(None)
        })?;

        if !deleted {
            return Err(AppError::NotFound(None));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(id)
    }

    /// Questions whose category is `id`
    pub async fn questions(&self, id: i64) -> Result<CategoryQuestionsDto> {
        let category = id.to_string();
        let questions = self.store.questions_by_category(&category).await?;

        if questions.is_empty() {
            return Err(AppError::bad_request(format!(
                "No questions with category {} found.",
                id
            )));
        }

        let questions: Vec<QuestionResponseDto> = questions.into_iter().map(Into::into).collect();

        Ok(CategoryQuestionsDto {
            total_questions: questions.len(),
            questions,
            current_category: category,
        })
    }
}
