use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::todo::models::ListTodosQuery;
use crate::domain::todo::models::Title;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::todo::errors::TodoError;

/// Postgres-backed todo store.
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TodoRow {
    fn try_into_todo(self) -> Result<Todo, TodoError> {
        Ok(Todo {
            id: TodoId(self.id),
            title: Title::new(self.title).map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
        })
    }
}

const SELECT_TODO: &str = r#"
    SELECT id, title, description, completed, created_at
    FROM todos
"#;

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, title, description, completed, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.title.as_str())
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(todo)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let row: Option<TodoRow> = sqlx::query_as(&format!("{SELECT_TODO} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.map(TodoRow::try_into_todo).transpose()
    }

    async fn list(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError> {
        let rows: Vec<TodoRow> = match query.completed {
            Some(completed) => {
                sqlx::query_as(&format!(
                    "{SELECT_TODO} WHERE completed = $1 ORDER BY created_at DESC OFFSET $2 LIMIT $3"
                ))
                .bind(completed)
                .bind(query.offset)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "{SELECT_TODO} ORDER BY created_at DESC OFFSET $1 LIMIT $2"
                ))
                .bind(query.offset)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TodoRow::try_into_todo).collect()
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos SET title = $2, description = $3, completed = $4
            WHERE id = $1
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.title.as_str())
        .bind(&todo.description)
        .bind(todo.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(todo.id.to_string()));
        }

        Ok(todo)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
