use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let todo_id = TodoId::from_string(&todo_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .todo_service
        .get_todo(&todo_id)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}
