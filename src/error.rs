//! Error types for the Bookshed server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Main application error type.
///
/// Every error resolves at the request boundary into an HTTP status plus
/// a `message` field; none are retried and none are fatal to the process.
#[derive(Error, Debug)]
pub enum AppError {
    /// No record with the requested id exists in the inventory.
    #[error("Book not Found")]
    NotFound,

    /// A required query parameter was absent from the request.
    #[error("Missing {0} query parameter")]
    MissingParameter(&'static str),

    /// Checkout requested while no copies are on the shelf.
    #[error("Book not Available")]
    Unavailable,

    /// The request body could not be decoded as a book record.
    #[error("Invalid book payload: {0}")]
    Decode(String),
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingParameter(_) | AppError::Unavailable | AppError::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
