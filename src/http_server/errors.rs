//! # API Errors
//!
//! Normalizes every failure into the envelope
//! `{ "error": { "message": ..., "code": ... } }` with a matching status.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::query::QueryError;
use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by HTTP handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A failure from the intern service
    Service(ServiceError),

    /// An error that carries its own status and code
    Tagged {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn tagged(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        ApiError::Tagged {
            status,
            code,
            message: message.into(),
        }
    }

    /// Unmatched route
    pub fn route_not_found() -> Self {
        Self::tagged(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found")
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::InvalidId(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::DuplicateEmail { .. } => StatusCode::CONFLICT,
                ServiceError::NotFound => StatusCode::NOT_FOUND,
                ServiceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Tagged { status, .. } => *status,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::InvalidId(_) => "INVALID_ID",
                ServiceError::Validation(_) => "VALIDATION_ERROR",
                ServiceError::DuplicateEmail { .. } => "DUPLICATE_ENTRY",
                ServiceError::NotFound => "NOT_FOUND",
                ServiceError::Unavailable(_) => "DATABASE_UNAVAILABLE",
                ServiceError::Internal(_) => "INTERNAL_ERROR",
            },
            ApiError::Tagged { code, .. } => *code,
        }
    }

    /// Human-readable message shown to clients.
    ///
    /// Internal and connectivity details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::InvalidId(_) => "Invalid ID format".to_string(),
                ServiceError::Unavailable(_) => {
                    "Unable to connect to the database. Please try again later.".to_string()
                }
                ServiceError::Internal(_) => "Internal server error".to_string(),
                other => other.to_string(),
            },
            ApiError::Tagged { message, .. } => message.clone(),
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                message: self.message(),
                code: self.code().to_string(),
            },
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::Service(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::tagged(rejection.status(), "INVALID_BODY", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "path rejected");
        Self::tagged(StatusCode::BAD_REQUEST, "INVALID_ID", "Invalid ID format")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::tagged(rejection.status(), "INVALID_QUERY", rejection.body_text())
    }
}

/// Handler for unmatched routes and unsupported methods
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Service(err @ (ServiceError::Internal(_) | ServiceError::Unavailable(_))) =
            &self
        {
            tracing::error!(status = status.as_u16(), error = %err, "request failed");
        }
        (status, Json(self.envelope())).into_response()
    }
}
