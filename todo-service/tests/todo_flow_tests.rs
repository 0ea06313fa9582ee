//! Todo lifecycle against an in-memory store.
//!
//! Exercises creation, listing with filters, partial updates, and
//! deletion without any network or database.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use todo_service::domain::todo::models::CreateTodoCommand;
use todo_service::domain::todo::models::ListTodosQuery;
use todo_service::domain::todo::models::Title;
use todo_service::domain::todo::models::Todo;
use todo_service::domain::todo::models::TodoId;
use todo_service::domain::todo::models::UpdateTodoCommand;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::todo::ports::TodoServicePort;
use todo_service::domain::todo::service::TodoService;
use todo_service::todo::errors::TodoError;

#[derive(Default)]
struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().unwrap();
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let todos = self.todos.lock().unwrap();
        Ok(todos.iter().find(|t| &t.id == id).cloned())
    }

    async fn list(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.lock().unwrap();
        Ok(todos
            .iter()
            .filter(|t| query.completed.map_or(true, |c| t.completed == c))
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().unwrap();
        let existing = todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(|| TodoError::NotFound(todo.id.to_string()))?;
        *existing = todo.clone();
        Ok(todo)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| &t.id != id);
        if todos.len() == before {
            return Err(TodoError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn service() -> TodoService<InMemoryTodoRepository> {
    TodoService::new(Arc::new(InMemoryTodoRepository::default()))
}

fn create_command(title: &str) -> CreateTodoCommand {
    CreateTodoCommand {
        title: Title::new(title.to_string()).unwrap(),
        description: None,
    }
}

#[tokio::test]
async fn test_todo_lifecycle() {
    let service = service();

    let created = service.create_todo(create_command("buy milk")).await.unwrap();
    assert!(!created.completed);

    let fetched = service.get_todo(&created.id).await.unwrap();
    assert_eq!(fetched.title.as_str(), "buy milk");

    let updated = service
        .update_todo(
            &created.id,
            UpdateTodoCommand {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title.as_str(), "buy milk");

    service.delete_todo(&created.id).await.unwrap();
    assert!(matches!(
        service.get_todo(&created.id).await,
        Err(TodoError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_todos_completion_filter_and_paging() {
    let service = service();

    for i in 0..5 {
        let todo = service
            .create_todo(create_command(&format!("task {i}")))
            .await
            .unwrap();
        if i % 2 == 0 {
            service
                .update_todo(
                    &todo.id,
                    UpdateTodoCommand {
                        completed: Some(true),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }
    }

    let completed = service
        .list_todos(ListTodosQuery {
            completed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(completed.len(), 3);

    let page = service
        .list_todos(ListTodosQuery {
            offset: 1,
            limit: 2,
            completed: None,
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_update_missing_todo_is_not_found() {
    let service = service();
    let result = service
        .update_todo(&TodoId::new(), UpdateTodoCommand::default())
        .await;
    assert!(matches!(result, Err(TodoError::NotFound(_))));
}
