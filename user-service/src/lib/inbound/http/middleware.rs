use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: Username,
}

/// Middleware enforcing bearer-token authentication on protected routes.
///
/// Token parsing and verification happen in the identity gate; the only
/// thing added here is mapping the uniform rejection onto a 401 and parsing
/// the subject back into a domain username.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let identity = state.gate.authenticate(header).map_err(|_| {
        tracing::warn!("Request authentication failed");
        unauthorized()
    })?;

    let username = Username::new(identity.subject).map_err(|e| {
        tracing::warn!(error = %e, "Verified token carried an unusable subject");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { username });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Invalid credentials"
        })),
    )
        .into_response()
}
