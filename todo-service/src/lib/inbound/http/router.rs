use std::sync::Arc;
use std::time::Duration;

use auth::IdentityGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_todo::create_todo;
use super::handlers::delete_todo::delete_todo;
use super::handlers::get_todo::get_todo;
use super::handlers::list_todos::list_todos;
use super::handlers::update_todo::update_todo;
use super::middleware::authenticate as auth_middleware;
use crate::domain::todo::service::TodoService;
use crate::outbound::repositories::todo::PostgresTodoRepository;

#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService<PostgresTodoRepository>>,
    pub gate: Arc<IdentityGate>,
}

pub fn create_router(
    todo_service: Arc<TodoService<PostgresTodoRepository>>,
    gate: Arc<IdentityGate>,
) -> Router {
    let state = AppState { todo_service, gate };

    let routes = Router::new()
        .route("/api/todos", post(create_todo))
        .route("/api/todos", get(list_todos))
        .route("/api/todos/:todo_id", get(get_todo))
        .route("/api/todos/:todo_id", patch(update_todo))
        .route("/api/todos/:todo_id", delete(delete_todo))
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
            )
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
        .merge(routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
