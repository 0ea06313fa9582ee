use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::schedule::models::Schedule;
use crate::schedule::errors::ScheduleError;

pub mod create_schedule;
pub mod delete_schedule;
pub mod list_schedules_by_date;
pub mod list_schedules_by_range;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ScheduleError::InvalidDateRange => ApiError::BadRequest(err.to_string()),
            ScheduleError::InvalidScheduleId(_)
            | ScheduleError::InvalidActivity(_)
            | ScheduleError::InvalidHours(_) => ApiError::UnprocessableEntity(err.to_string()),
            ScheduleError::DatabaseError(_) | ScheduleError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Shared response shape for a single schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResponseData {
    pub id: String,
    pub activity: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub planned: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Schedule> for ScheduleResponseData {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.to_string(),
            activity: schedule.activity.as_str().to_string(),
            hours: schedule.hours.value(),
            date: schedule.date,
            planned: schedule.planned,
            created_at: schedule.created_at,
        }
    }
}
