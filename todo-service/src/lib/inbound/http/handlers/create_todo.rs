use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Title;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let title = Title::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let command = CreateTodoCommand {
        title,
        description: body.description,
    };

    state
        .todo_service
        .create_todo(command)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
}
