//! Error types for chronotext operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Field out of range: {0}")]
    FieldOutOfRange(String),

    #[error("Invalid precision level: {0}")]
    InvalidPrecision(u8),

    #[error("Invalid calendar model: {0}")]
    InvalidCalendar(String),

    #[error("Invalid ISO 8601 datetime: {0}")]
    InvalidIso8601(String),
}

pub type Result<T> = std::result::Result<T, TimeError>;
