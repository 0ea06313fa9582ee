use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::schedule::models::ScheduleId;
use crate::domain::schedule::ports::ScheduleServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let schedule_id =
        ScheduleId::from_string(&schedule_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .schedule_service
        .delete_schedule(&schedule_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
