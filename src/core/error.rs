use thiserror::Error;
use validator::ValidationErrors;

use crate::features::farms::FarmError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<FarmError> for AppError {
    fn from(err: FarmError) -> Self {
        match err {
            FarmError::InvalidArgument(_) => AppError::Validation(err.to_string()),
            FarmError::InvalidStateTransition { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
