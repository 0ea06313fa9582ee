use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::todo::errors::TitleError;
use crate::todo::errors::TodoIdError;

/// Todo aggregate entity.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub title: Title,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Todo unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Generate a new random todo ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a todo ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TodoIdError> {
        Uuid::parse_str(s)
            .map(TodoId)
            .map_err(|e| TodoIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Title value type
///
/// Non-empty, at most 256 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 256;

    /// Create a validated title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 256 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        if title.trim().is_empty() {
            return Err(TitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new todo
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: Title,
    pub description: Option<String>,
}

/// Command to partially update a todo.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateTodoCommand {
    pub title: Option<Title>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Paging and filtering for todo listings.
#[derive(Debug, Clone, Copy)]
pub struct ListTodosQuery {
    pub offset: i64,
    pub limit: i64,
    pub completed: Option<bool>,
}

impl Default for ListTodosQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            completed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert!(Title::new("buy milk".to_string()).is_ok());
        assert!(Title::new("".to_string()).is_err());
        assert!(Title::new("   ".to_string()).is_err());
        assert!(Title::new("x".repeat(257)).is_err());
    }
}
