use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use mamacare_storage::error::StorageError;
use mamacare_storage::service::ServiceError;

use crate::response::Envelope;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(Envelope::<()>::failure(message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            // A missing parent or a taken week blocks an otherwise well-formed create.
            ServiceError::Validation(_)
            | ServiceError::ParentNotFound { .. }
            | ServiceError::DuplicateWeek { .. } => ApiError::BadRequest(e.to_string()),
            ServiceError::Storage(inner) => ApiError::from(inner),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
