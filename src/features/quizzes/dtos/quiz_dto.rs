use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::shared::deserializers::deserialize_id_string;

/// Category chosen for a quiz round
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id as a number or string; `0` means all categories
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,

    /// Category label as shown by the client; selection only uses `id`
    #[serde(rename = "type", default)]
    #[allow(dead_code)]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already asked in this round
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Next question of the round; `null` once every candidate was asked
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub question: Option<QuestionResponseDto>,
}
