use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::list_schedules_by_date::parse_date;
use super::ApiError;
use super::ApiSuccess;
use super::ScheduleResponseData;
use crate::domain::schedule::ports::ScheduleServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_schedules_by_range(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<ApiSuccess<Vec<ScheduleResponseData>>, ApiError> {
    let start = parse_date(&start_date)?;
    let end = parse_date(&end_date)?;

    state
        .schedule_service
        .list_schedules_by_range(start, end)
        .await
        .map_err(ApiError::from)
        .map(|schedules| {
            let data = schedules.iter().map(ScheduleResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
