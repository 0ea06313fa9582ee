use thiserror::Error;

/// Error for ScheduleId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Activity validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity must not be empty")]
    Empty,

    #[error("Activity too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for hours validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HoursError {
    #[error("Hours must be a positive number, got {0}")]
    NotPositive(f64),

    #[error("Hours must not exceed 24 per day, got {0}")]
    TooLarge(f64),
}

/// Top-level error for all schedule operations
#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    #[error("Invalid schedule ID: {0}")]
    InvalidScheduleId(#[from] ScheduleIdError),

    #[error("Invalid activity: {0}")]
    InvalidActivity(#[from] ActivityError),

    #[error("Invalid hours: {0}")]
    InvalidHours(#[from] HoursError),

    #[error("Start date must not be after end date")]
    InvalidDateRange,

    #[error("Schedule not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ScheduleError {
    fn from(err: anyhow::Error) -> Self {
        ScheduleError::Unknown(err.to_string())
    }
}
