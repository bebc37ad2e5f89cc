//! API error type and boundary status mapping
//!
//! Handlers return `Result<_, ApiError>`; the mapping to HTTP status codes
//! and the JSON error body happens only here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::export::ExportError;

/// One entry of a validation error list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    /// Field the error refers to
    pub field: String,
    /// Human-readable problem description
    pub message: String,
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Error description
    pub error: String,
    /// Per-field details, present for validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Request-terminal error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad login or missing/wrong bearer token
    #[error("{0}")]
    Unauthorized(String),

    /// Unknown or soft-deleted identifier
    #[error("{0}")]
    NotFound(String),

    /// Missing/malformed required fields on create or update
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Storage or formatter failure, surfaced with the underlying message
    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ServiceNotFound(_) => Self::NotFound("Service not found".to_string()),
            DomainError::StorageError(msg) => Self::Internal(msg),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let (error, details) = match self {
            Self::Validation(details) => ("Validation failed".to_string(), Some(details)),
            other => (other.to_string(), None),
        };

        let body = ErrorBody {
            success: false,
            error,
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        let cases = [
            (
                ApiError::Unauthorized("Invalid credentials".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::NotFound("Service not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Validation(vec![]),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn domain_not_found_maps_to_404() {
        let error: ApiError = DomainError::ServiceNotFound("x".to_string()).into();
        assert!(matches!(error, ApiError::NotFound(_)));
    }
}
