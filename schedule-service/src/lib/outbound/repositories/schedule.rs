use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::schedule::models::Activity;
use crate::domain::schedule::models::Hours;
use crate::domain::schedule::models::Schedule;
use crate::domain::schedule::models::ScheduleId;
use crate::domain::schedule::ports::ScheduleRepository;
use crate::schedule::errors::ScheduleError;

/// Postgres-backed schedule store.
pub struct PostgresScheduleRepository {
    pool: PgPool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduleRow {
    id: Uuid,
    activity: String,
    hours: f64,
    date: NaiveDate,
    planned: bool,
    created_at: DateTime<Utc>,
}

impl ScheduleRow {
    fn try_into_schedule(self) -> Result<Schedule, ScheduleError> {
        Ok(Schedule {
            id: ScheduleId(self.id),
            activity: Activity::new(self.activity)
                .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?,
            hours: Hours::new(self.hours)
                .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?,
            date: self.date,
            planned: self.planned,
            created_at: self.created_at,
        })
    }
}

const SELECT_SCHEDULE: &str = r#"
    SELECT id, activity, hours, date, planned, created_at
    FROM schedules
"#;

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn create(&self, schedule: Schedule) -> Result<Schedule, ScheduleError> {
        sqlx::query(
            r#"
            INSERT INTO schedules (id, activity, hours, date, planned, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(schedule.id.0)
        .bind(schedule.activity.as_str())
        .bind(schedule.hours.value())
        .bind(schedule.date)
        .bind(schedule.planned)
        .bind(schedule.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        Ok(schedule)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Schedule>, ScheduleError> {
        let rows: Vec<ScheduleRow> =
            sqlx::query_as(&format!("{SELECT_SCHEDULE} WHERE date = $1"))
                .bind(date)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ScheduleRow::try_into_schedule).collect()
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        let rows: Vec<ScheduleRow> = sqlx::query_as(&format!(
            "{SELECT_SCHEDULE} WHERE date >= $1 AND date <= $2 ORDER BY date"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ScheduleRow::try_into_schedule).collect()
    }

    async fn delete(&self, id: &ScheduleId) -> Result<(), ScheduleError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ScheduleError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
