use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ScheduleResponseData;
use crate::domain::schedule::models::Activity;
use crate::domain::schedule::models::CreateScheduleCommand;
use crate::domain::schedule::models::Hours;
use crate::domain::schedule::ports::ScheduleServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_schedule(
    State(state): State<AppState>,
    Json(body): Json<CreateScheduleRequest>,
) -> Result<ApiSuccess<ScheduleResponseData>, ApiError> {
    let activity =
        Activity::new(body.activity).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let hours = Hours::new(body.hours).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateScheduleCommand {
        activity,
        hours,
        date: body.date,
        planned: body.planned.unwrap_or(true),
    };

    state
        .schedule_service
        .create_schedule(command)
        .await
        .map_err(ApiError::from)
        .map(|ref schedule| ApiSuccess::new(StatusCode::CREATED, schedule.into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateScheduleRequest {
    activity: String,
    hours: f64,
    date: NaiveDate,
    /// Defaults to true; false records time already spent.
    #[serde(default)]
    planned: Option<bool>,
}
