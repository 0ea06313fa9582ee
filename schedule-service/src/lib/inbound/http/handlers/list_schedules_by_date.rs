use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;

use super::ApiError;
use super::ApiSuccess;
use super::ScheduleResponseData;
use crate::domain::schedule::ports::ScheduleServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_schedules_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<ApiSuccess<Vec<ScheduleResponseData>>, ApiError> {
    let date = parse_date(&date)?;

    state
        .schedule_service
        .list_schedules_by_date(date)
        .await
        .map_err(ApiError::from)
        .map(|schedules| {
            let data = schedules.iter().map(ScheduleResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

pub(super) fn parse_date(s: &str) -> Result<NaiveDate, ApiError> {
    s.parse::<NaiveDate>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid date: {s}, expected YYYY-MM-DD")))
}
