use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Middleware enforcing bearer-token authentication.
///
/// This service never issues tokens; it only trusts ones signed by the
/// user-service with the shared secret.
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
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid credentials"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        subject: identity.subject,
    });

    Ok(next.run(req).await)
}
