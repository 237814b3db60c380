use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::store::StoreError;
use crate::shared::types::ErrorResponse;

/// Application error rendered as `{success: false, error, message}`.
///
/// Client-facing variants carry an optional message; when absent the status
/// code's default text is used.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Bad request: {0:?}")]
    BadRequest(Option<String>),

    #[error("Not found: {0:?}")]
    NotFound(Option<String>),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0:?}")]
    Unprocessable(Option<String>),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(Some(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(Some(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Message shown to the client.
    pub fn message(&self) -> String {
        let attached = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unprocessable(msg) => msg.clone(),
            AppError::Store(_) | AppError::MethodNotAllowed => None,
        };

        attached.unwrap_or_else(|| default_message(self.status()).to_string())
    }
}

/// Fixed default text per status code.
pub fn default_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        _ => "Internal Server Error",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("Store error: {:?}", e),
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable request: {:?}", msg),
            _ => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status, self.message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
