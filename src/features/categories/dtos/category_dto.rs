use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::questions::dtos::QuestionResponseDto;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// Category labels, in id order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub categories: Vec<String>,
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Display label
    #[serde(rename = "type")]
    #[validate(
        required(message = "Fill Type Field"),
        length(min = 1, message = "Fill Type Field")
    )]
    pub kind: Option<String>,
}

impl CreateCategoryDto {
    pub const FIELD_ORDER: &'static [&'static str] = &["type"];
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreatedDto {
    pub created: i64,
    pub category: CategoryResponseDto,
}

/// Questions filed under one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_serializes_label_as_type() {
        let dto = CategoryResponseDto::from(Category {
            id: 1,
            kind: "Science".to_string(),
        });
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({"id": 1, "type": "Science"})
        );
    }

    #[test]
    fn test_create_category_reads_type() {
        let dto: CreateCategoryDto = serde_json::from_value(json!({"type": "Udacity"})).unwrap();
        assert_eq!(dto.kind.as_deref(), Some("Udacity"));
        assert!(dto.validate().is_ok());

        let dto: CreateCategoryDto = serde_json::from_value(json!({})).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("type"));
    }
}
