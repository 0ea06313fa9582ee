use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::todo::models::ListTodosQuery;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> Result<ApiSuccess<Vec<TodoResponseData>>, ApiError> {
    let query = ListTodosQuery {
        offset: params.skip.unwrap_or(0).max(0),
        limit: params.limit.unwrap_or(100).clamp(1, 500),
        completed: params.completed,
    };

    state
        .todo_service
        .list_todos(query)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            let data = todos.iter().map(TodoResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTodosParams {
    skip: Option<i64>,
    limit: Option<i64>,
    completed: Option<bool>,
}
