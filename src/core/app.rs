use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes wired to `store`, with JSON 404/405 fallbacks
pub fn create_app(store: Arc<dyn TriviaStore>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service))
        .route("/health", get(health_check))
        .fallback(middleware::not_found_fallback)
        .method_not_allowed_fallback(middleware::method_not_allowed_fallback)
}

/// CORS, request id and tracing layers
pub fn with_http_layers(router: Router, config: &AppConfig) -> Router {
    router
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
