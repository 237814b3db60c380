use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ApiResponse, DeletedDto, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::delete_category,
        categories_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_or_search_questions,
        questions_handlers::delete_question,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            DeletedDto,
            ApiResponse<DeletedDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryCreatedDto,
            categories_dtos::CategoryQuestionsDto,
            ApiResponse<categories_dtos::CategoryListDto>,
            ApiResponse<categories_dtos::CategoryCreatedDto>,
            ApiResponse<categories_dtos::CategoryQuestionsDto>,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionRequestDto,
            questions_dtos::QuestionFieldsDto,
            questions_dtos::QuestionCreatedDto,
            questions_dtos::QuestionListDto,
            questions_dtos::QuestionSearchDto,
            ApiResponse<questions_dtos::QuestionListDto>,
            ApiResponse<questions_dtos::QuestionCreatedDto>,
            ApiResponse<questions_dtos::QuestionSearchDto>,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
            ApiResponse<quizzes_dtos::QuizResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Trivia questions: list, search, create, delete"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Questions, categories and quiz play for the trivia game",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/categories",
            "/categories/{id}",
            "/categories/{id}/questions",
            "/questions",
            "/questions/{id}",
            "/quizzes",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
