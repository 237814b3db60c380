use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::questions::dtos::{QuestionCreatedDto, QuestionListDto, QuestionRequestDto};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, DeletedDto, ErrorResponse, PaginationQuery};
use crate::shared::validation::validate_in_order;

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of questions", body = ApiResponse<QuestionListDto>),
        (status = 404, description = "Page is empty", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<QuestionListDto>>> {
    let page = service.list_page(&pagination).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a question, or search questions when `searchTerm` is present
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionRequestDto,
    responses(
        (status = 200, description = "Question created (search requests return ApiResponse<QuestionSearchDto>)", body = ApiResponse<QuestionCreatedDto>),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 404, description = "No question matches the search term", body = ErrorResponse),
        (status = 422, description = "Question could not be stored", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_or_search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> Result<Response> {
    if body.is_empty() {
        return Err(AppError::bad_request(
            "Request does not contain a valid JSON body.",
        ));
    }

    let dto: QuestionRequestDto = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::bad_request(format!("Invalid JSON data: {}", e)))?;

    if let Some(term) = dto.search_term.as_deref() {
        let found = service.search(term).await?;
        return Ok(Json(ApiResponse::success(found)).into_response());
    }

    validate_in_order(&dto, QuestionRequestDto::FIELD_ORDER)?;

    let created = service.create(dto).await?;
    Ok(Json(ApiResponse::success(created)).into_response())
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<DeletedDto>),
        (status = 400, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(DeletedDto { deleted })))
}
