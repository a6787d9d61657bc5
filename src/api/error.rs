//! Translation of domain errors into HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::dto::ErrorResponse;
use crate::domain::DomainError;

/// Message returned for failures whose detail must stay internal.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// 404 with an empty body
    NotFound,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::NotFound => return StatusCode::NOT_FOUND.into_response(),
            Self::Domain(err) => err,
        };

        let (status, message) = match err {
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
            DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            DomainError::Unexpected(detail) => {
                error!("Unexpected error while handling request: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
