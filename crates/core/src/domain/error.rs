// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Instant has no explicit UTC offset: {0}")]
    MissingOffset(String),

    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

pub type Result<T> = std::result::Result<T, DomainError>;
