use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    /// Classify store errors by kind rather than by engine-specific codes.
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(msg) = &err {
            return Self::NotFound(msg.clone());
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            _ => Self::Db(err.to_string()),
        }
    }
}
