use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::ListTodosQuery;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::todo::errors::TodoError;
use crate::todo::ports::TodoRepository;
use crate::todo::ports::TodoServicePort;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(&self, command: CreateTodoCommand) -> Result<Todo, TodoError> {
        let todo = Todo {
            id: TodoId::new(),
            title: command.title,
            description: command.description,
            completed: false,
            created_at: Utc::now(),
        };

        self.repository.create(todo).await
    }

    async fn get_todo(&self, id: &TodoId) -> Result<Todo, TodoError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id.to_string()))
    }

    async fn list_todos(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError> {
        self.repository.list(query).await
    }

    async fn update_todo(
        &self,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            todo.title = title;
        }
        if let Some(description) = command.description {
            todo.description = Some(description);
        }
        if let Some(completed) = command.completed {
            todo.completed = completed;
        }

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::todo::models::Title;

    mock! {
        pub TestTodoRepository {}

        #[async_trait]
        impl TodoRepository for TestTodoRepository {
            async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;
            async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError>;
            async fn list(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError>;
            async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;
            async fn delete(&self, id: &TodoId) -> Result<(), TodoError>;
        }
    }

    fn stored_todo(title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(),
            title: Title::new(title.to_string()).unwrap(),
            description: None,
            completed,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_todo_starts_incomplete() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_create()
            .withf(|todo| todo.title.as_str() == "buy milk" && !todo.completed)
            .times(1)
            .returning(|todo| Ok(todo));

        let service = TodoService::new(Arc::new(repository));

        let command = CreateTodoCommand {
            title: Title::new("buy milk".to_string()).unwrap(),
            description: Some("two liters".to_string()),
        };

        let todo = service.create_todo(command).await.unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.description.as_deref(), Some("two liters"));
    }

    #[tokio::test]
    async fn test_get_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TodoService::new(Arc::new(repository));

        let result = service.get_todo(&TodoId::new()).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_todo_applies_only_set_fields() {
        let mut repository = MockTestTodoRepository::new();
        let existing = stored_todo("buy milk", false);
        let todo_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == todo_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|todo| todo.title.as_str() == "buy milk" && todo.completed)
            .times(1)
            .returning(|todo| Ok(todo));

        let service = TodoService::new(Arc::new(repository));

        let command = UpdateTodoCommand {
            completed: Some(true),
            ..Default::default()
        };

        let updated = service.update_todo(&todo_id, command).await.unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title.as_str(), "buy milk");
    }

    #[tokio::test]
    async fn test_update_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TodoService::new(Arc::new(repository));

        let result = service
            .update_todo(&TodoId::new(), UpdateTodoCommand::default())
            .await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_todos_passes_filter() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_list()
            .withf(|query| query.completed == Some(true) && query.limit == 10)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = TodoService::new(Arc::new(repository));

        let query = ListTodosQuery {
            offset: 0,
            limit: 10,
            completed: Some(true),
        };
        let todos = service.list_todos(query).await.unwrap();
        assert!(todos.is_empty());
    }
}
