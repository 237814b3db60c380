use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/categories/{id}", delete(handlers::delete_category))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}
