use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::schedule::models::CreateScheduleCommand;
use crate::domain::schedule::models::Schedule;
use crate::domain::schedule::models::ScheduleId;
use crate::schedule::errors::ScheduleError;
use crate::schedule::ports::ScheduleRepository;
use crate::schedule::ports::ScheduleServicePort;

/// Domain service implementation for schedule operations.
pub struct ScheduleService<SR>
where
    SR: ScheduleRepository,
{
    repository: Arc<SR>,
}

impl<SR> ScheduleService<SR>
where
    SR: ScheduleRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> ScheduleServicePort for ScheduleService<SR>
where
    SR: ScheduleRepository,
{
    async fn create_schedule(
        &self,
        command: CreateScheduleCommand,
    ) -> Result<Schedule, ScheduleError> {
        let schedule = Schedule {
            id: ScheduleId::new(),
            activity: command.activity,
            hours: command.hours,
            date: command.date,
            planned: command.planned,
            created_at: Utc::now(),
        };

        self.repository.create(schedule).await
    }

    async fn list_schedules_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        self.repository.find_by_date(date).await
    }

    async fn list_schedules_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        if start > end {
            return Err(ScheduleError::InvalidDateRange);
        }
        self.repository.find_by_date_range(start, end).await
    }

    async fn delete_schedule(&self, id: &ScheduleId) -> Result<(), ScheduleError> {
        self.repository.delete(id).await
    }
}
