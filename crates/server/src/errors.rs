use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::errors::{FieldIssue, ServiceError};

pub const INTERNAL_MESSAGE: &str = "Internal server error";
pub const VALIDATION_MESSAGE: &str = "Validation error";

/// Boundary error: every handler failure becomes one of these before it reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldIssue>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<FieldIssue>>,
}

impl ErrorBody {
    fn message(msg: impl Into<String>) -> Self {
        Self { message: msg.into(), issues: None }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(issues) => ApiError::Validation(issues),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldIssue::new("body", rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(issues) => ErrorBody { message: VALIDATION_MESSAGE.into(), issues: Some(issues) },
            ApiError::Conflict(msg) | ApiError::NotFound(msg) => ErrorBody::message(msg),
            ApiError::Internal(detail) => {
                // detail stays in the log; the client only gets the generic message
                error!(error = %detail, "request failed");
                ErrorBody::message(INTERNAL_MESSAGE)
            }
        };
        (status, Json(body)).into_response()
    }
}
