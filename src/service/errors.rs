//! # Service Errors
//!
//! Failure taxonomy for intern operations. Store and validation failures
//! are folded into these kinds before they reach the HTTP layer.

use thiserror::Error;

use crate::query::QueryError;
use crate::schema::ValidationErrors;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Intern service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Malformed, missing or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Identifier is not a well-formed id
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Another record already uses this email
    #[error("An intern with this {field} already exists")]
    DuplicateEmail { field: &'static str },

    /// No record at the identifier
    #[error("Intern not found")]
    NotFound,

    /// The store could not be reached
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Anything unanticipated
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::Validation(err.message())
    }
}

impl From<QueryError> for ServiceError {
    fn from(err: QueryError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey { field } => ServiceError::DuplicateEmail { field },
            StoreError::NotConnected => ServiceError::Unavailable(err.to_string()),
            StoreError::Io(_) | StoreError::Json(_) | StoreError::LockPoisoned => {
                ServiceError::Internal(err.to_string())
            }
        }
    }
}
