use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Return the account behind the presented access token.
///
/// The token subject is resolved back through the directory; an account that
/// was deactivated or deleted after the token was issued gets a 401 even
/// though the token itself still verifies.
pub async fn me(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let user = state
        .user_service
        .get_user_by_username(&current_user.username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    if !user.is_active {
        return Err(ApiError::Unauthorized("User is not active".to_string()));
    }

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
