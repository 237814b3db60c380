use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::deserializers::{
    deserialize_optional_id_string, deserialize_optional_nonzero_i32,
};

/// Formatted question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Body of `POST /questions`.
///
/// A non-null `searchTerm` makes this a search; otherwise the remaining
/// fields describe a question to create and are all required.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct QuestionRequestDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,

    #[validate(
        required(message = "Fill Question Field"),
        length(min = 1, message = "Fill Question Field")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "Fill Answer Field"),
        length(min = 1, message = "Fill Answer Field")
    )]
    pub answer: Option<String>,

    /// Category id, as a number or a string
    #[serde(default, deserialize_with = "deserialize_optional_id_string")]
    #[validate(
        required(message = "Fill Category Field"),
        length(min = 1, message = "Fill Category Field")
    )]
    pub category: Option<String>,

    /// Difficulty score; 0 counts as missing
    #[serde(default, deserialize_with = "deserialize_optional_nonzero_i32")]
    #[validate(required(message = "Fill Difficulty Field"))]
    pub difficulty: Option<i32>,
}

impl QuestionRequestDto {
    /// Required fields, in the order they are reported
    pub const FIELD_ORDER: &'static [&'static str] =
        &["question", "answer", "category", "difficulty"];

    /// Convert a validated request into insert values
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
        }
    }
}

/// Stored fields echoed back after a create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionFieldsDto {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl From<Question> for QuestionFieldsDto {
    fn from(q: Question) -> Self {
        Self {
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedDto {
    pub created: i64,
    pub question: QuestionFieldsDto,
    pub total_questions: usize,
}

/// One page of the question list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionSearchDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}
