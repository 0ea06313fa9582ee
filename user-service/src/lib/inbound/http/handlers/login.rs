use auth::TokenKind;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Verify credentials and issue an access token.
///
/// Every failure path (malformed username, unknown account, wrong password,
/// inactive account) collapses into the same 401 so the response reveals
/// nothing about which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let user = state
        .user_service
        .authenticate_user(&username, &body.password)
        .await
        .map_err(ApiError::from)?;

    let access_token = state
        .token_codec
        .issue(
            user.username.as_str(),
            TokenKind::Access,
            Duration::minutes(state.access_ttl_minutes),
        )
        .map_err(|e| {
            ApiError::InternalServerError(format!("Token generation failed: {}", e))
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token,
            token_type: "bearer".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
