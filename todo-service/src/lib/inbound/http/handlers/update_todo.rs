use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::todo::models::Title;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let todo_id = TodoId::from_string(&todo_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let title = body
        .title
        .map(Title::new)
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateTodoCommand {
        title,
        description: body.description,
        completed: body.completed,
    };

    state
        .todo_service
        .update_todo(&todo_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoRequest {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}
