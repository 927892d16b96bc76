//! Error types for the library API

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book {0} not found")]
    BookNotFound(i64),

    #[error("Invalid book data: {0}")]
    InvalidPayload(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BookNotFound(id) => {
                tracing::debug!("Book {} not found", id);
                (StatusCode::NOT_FOUND, "Book not found")
            }
            AppError::InvalidPayload(reason) => {
                tracing::debug!("Rejected book payload: {}", reason);
                (StatusCode::BAD_REQUEST, "Invalid book data")
            }
            AppError::NotFound(what) => {
                tracing::debug!("No route for {}", what);
                (StatusCode::NOT_FOUND, "Not found")
            }
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
