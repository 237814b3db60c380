use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::{QuizCriteria, QuizService};
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Next quiz question
///
/// Returns a random question from the chosen category (all categories when
/// absent or `0`) that is not in `previous_questions`. `question` is `null`
/// when the round has run out of questions.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = ApiResponse<QuizResponseDto>),
        (status = 400, description = "Missing or malformed JSON body", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<ApiResponse<QuizResponseDto>>> {
    let criteria = QuizCriteria::from(dto);
    let next = service.next_question(&criteria).await?;
    Ok(Json(ApiResponse::success(next)))
}
