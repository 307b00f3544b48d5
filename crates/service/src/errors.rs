use serde::Serialize;
use thiserror::Error;

use models::errors::ModelError;

/// One rejected input field, reported back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", describe(.0))]
    Validation(Vec<FieldIssue>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn invalid(field: &str, message: &str) -> Self {
        Self::Validation(vec![FieldIssue::new(field, message)])
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation { field, message } => Self::invalid(field, &message),
            ModelError::Conflict(msg) => Self::Conflict(msg),
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}
