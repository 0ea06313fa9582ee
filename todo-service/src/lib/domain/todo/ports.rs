use async_trait::async_trait;

use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::ListTodosQuery;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::todo::errors::TodoError;

/// Port for todo domain service operations.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a new todo.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create_todo(&self, command: CreateTodoCommand) -> Result<Todo, TodoError>;

    /// Retrieve a todo by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get_todo(&self, id: &TodoId) -> Result<Todo, TodoError>;

    /// List todos with paging and an optional completion filter.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_todos(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError>;

    /// Apply a partial update to an existing todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn update_todo(&self, id: &TodoId, command: UpdateTodoCommand)
        -> Result<Todo, TodoError>;

    /// Delete a todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for the todo aggregate.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Retrieve a todo by identifier, `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    /// List todos matching the query, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError>;

    /// Update an existing todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Remove a todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, id: &TodoId) -> Result<(), TodoError>;
}
