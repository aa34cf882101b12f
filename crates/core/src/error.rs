// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timer unavailable: {0}")]
    TimerUnavailable(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
