use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::schedule::models::CreateScheduleCommand;
use crate::domain::schedule::models::Schedule;
use crate::domain::schedule::models::ScheduleId;
use crate::schedule::errors::ScheduleError;

/// Port for schedule domain service operations.
#[async_trait]
pub trait ScheduleServicePort: Send + Sync + 'static {
    /// Create a new schedule entry.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create_schedule(&self, command: CreateScheduleCommand)
        -> Result<Schedule, ScheduleError>;

    /// List all entries on a single date.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_schedules_by_date(&self, date: NaiveDate)
        -> Result<Vec<Schedule>, ScheduleError>;

    /// List entries in an inclusive date range, ordered by date.
    ///
    /// # Errors
    /// * `InvalidDateRange` - Start date is after end date
    /// * `DatabaseError` - Storage operation failed
    async fn list_schedules_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Schedule>, ScheduleError>;

    /// Delete a schedule entry.
    ///
    /// # Errors
    /// * `NotFound` - Schedule does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete_schedule(&self, id: &ScheduleId) -> Result<(), ScheduleError>;
}

/// Persistence operations for the schedule aggregate.
#[async_trait]
pub trait ScheduleRepository: Send + Sync + 'static {
    /// Persist a new schedule entry.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, schedule: Schedule) -> Result<Schedule, ScheduleError>;

    /// All entries on the given date.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Schedule>, ScheduleError>;

    /// All entries with `start <= date <= end`, ordered by date.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Schedule>, ScheduleError>;

    /// Remove a schedule entry.
    ///
    /// # Errors
    /// * `NotFound` - Schedule does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, id: &ScheduleId) -> Result<(), ScheduleError>;
}
