//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::AdminError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Authentication required".to_string(),
            ),
            ApiError::Admin(err @ AdminError::Validation(detail)) => {
                (StatusCode::BAD_REQUEST, err.code(), detail.clone())
            }
            ApiError::Admin(err @ AdminError::Forbidden(detail)) => {
                (StatusCode::FORBIDDEN, err.code(), detail.clone())
            }
            ApiError::Admin(err @ AdminError::NotFound(detail)) => {
                (StatusCode::NOT_FOUND, err.code(), detail.clone())
            }
            ApiError::Admin(err @ AdminError::DataAccess { op, .. }) => {
                tracing::error!(error = %err, "API data access error");
                (
                    StatusCode::BAD_GATEWAY,
                    err.code(),
                    format!("Data access failed during {op}"),
                )
            }
            ApiError::Admin(err @ AdminError::Unknown(detail)) => {
                tracing::error!(detail, "API unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.code(),
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}
