use std::sync::Arc;
use std::time::Duration;

use auth::IdentityGate;
use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register_user::register_user;
use super::handlers::set_user_active::activate_user;
use super::handlers::set_user_active::deactivate_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub token_codec: Arc<TokenCodec>,
    pub gate: Arc<IdentityGate>,
    pub access_ttl_minutes: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    token_codec: Arc<TokenCodec>,
    gate: Arc<IdentityGate>,
    access_ttl_minutes: i64,
) -> Router {
    let state = AppState {
        user_service,
        token_codec,
        gate,
        access_ttl_minutes,
    };

    let public_routes = Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login));

    let protected_routes = Router::new()
        .route("/api/users/me", get(me))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route("/api/users/:user_id/activate", put(activate_user))
        .route("/api/users/:user_id/deactivate", put(deactivate_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
