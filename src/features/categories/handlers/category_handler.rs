use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{
    CategoryCreatedDto, CategoryListDto, CategoryQuestionsDto, CreateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, DeletedDto, ErrorResponse};
use crate::shared::validation::validate_in_order;

/// List all category labels
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category labels", body = ApiResponse<CategoryListDto>),
        (status = 404, description = "No categories", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryCreatedDto>),
        (status = 400, description = "Missing type", body = ErrorResponse),
        (status = 422, description = "Category could not be stored", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryCreatedDto>>> {
    validate_in_order(&dto, CreateCategoryDto::FIELD_ORDER)?;

    let created = service.create(dto).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// Delete a category
///
/// Questions filed under the category are kept.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 422, description = "Category could not be deleted", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(DeletedDto { deleted })))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = ApiResponse<CategoryQuestionsDto>),
        (status = 400, description = "No questions in the category", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let questions = service.questions(id).await?;
    Ok(Json(ApiResponse::success(questions)))
}
