//! Error types for the store, the allocation and resolution engines, and the
//! HTTP boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised by the durable mapping store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("store returned invalid data: {0}")]
    InvalidData(String),
}

/// Failure modes of [`crate::application::services::AllocationService::allocate`].
#[derive(Debug, Error)]
pub enum AllocateError {
    /// Malformed input, rejected before any I/O.
    #[error("{0}")]
    Validation(String),
    /// The store failed for a reason other than a taken code. Never retried.
    #[error("failed to persist mapping: {0}")]
    Store(#[from] StoreError),
    /// Every attempt collided with an existing code.
    #[error("no unique short code after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Failure modes of [`crate::application::services::ResolutionService::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("short code not found")]
    NotFound,
    #[error("failed to look up mapping: {0}")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned by HTTP handlers.
///
/// Renders as `{"error": "<message>"}` with the matching status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AllocateError> for AppError {
    fn from(err: AllocateError) -> Self {
        match err {
            AllocateError::Validation(message) => AppError::bad_request(message),
            AllocateError::Store(_) => {
                AppError::internal("Internal server error during URL shortening")
            }
            AllocateError::Exhausted { .. } => {
                AppError::internal("Could not generate a unique short code. Please try again.")
            }
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => AppError::not_found("Short URL not found"),
            ResolveError::Store(_) => AppError::internal("Internal server error"),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request body".to_string());

        AppError::bad_request(message)
    }
}
