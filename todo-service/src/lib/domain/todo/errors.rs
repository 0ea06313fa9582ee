use thiserror::Error;

/// Error for TodoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all todo operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo ID: {0}")]
    InvalidTodoId(#[from] TodoIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TodoError {
    fn from(err: anyhow::Error) -> Self {
        TodoError::Unknown(err.to_string())
    }
}
