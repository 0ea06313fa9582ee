use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::me::UserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn activate_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    set_active(state, user_id, true).await
}

pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    set_active(state, user_id, false).await
}

async fn set_active(
    state: AppState,
    user_id: String,
    active: bool,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .set_user_active(&user_id, active)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
