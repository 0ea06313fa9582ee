use std::sync::Arc;
use std::time::Duration;

use auth::IdentityGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_schedule::create_schedule;
use super::handlers::delete_schedule::delete_schedule;
use super::handlers::list_schedules_by_date::list_schedules_by_date;
use super::handlers::list_schedules_by_range::list_schedules_by_range;
use super::middleware::authenticate as auth_middleware;
use crate::domain::schedule::service::ScheduleService;
use crate::outbound::repositories::schedule::PostgresScheduleRepository;

#[derive(Clone)]
pub struct AppState {
    pub schedule_service: Arc<ScheduleService<PostgresScheduleRepository>>,
    pub gate: Arc<IdentityGate>,
}

pub fn create_router(
    schedule_service: Arc<ScheduleService<PostgresScheduleRepository>>,
    gate: Arc<IdentityGate>,
) -> Router {
    let state = AppState {
        schedule_service,
        gate,
    };

    let routes = Router::new()
        .route("/api/schedules", post(create_schedule))
        .route("/api/schedules/date/:date", get(list_schedules_by_date))
        .route(
            "/api/schedules/range/:start_date/:end_date",
            get(list_schedules_by_range),
        )
        .route("/api/schedules/:schedule_id", delete(delete_schedule))
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
