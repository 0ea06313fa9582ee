use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::schedule::errors::ActivityError;
use crate::schedule::errors::HoursError;
use crate::schedule::errors::ScheduleIdError;

/// Schedule aggregate entity.
///
/// A schedule row is either a plan (`planned = true`) or a log of time
/// actually spent (`planned = false`).
#[derive(Debug, Clone)]
pub struct Schedule {
    pub id: ScheduleId,
    pub activity: Activity,
    pub hours: Hours,
    pub date: NaiveDate,
    pub planned: bool,
    pub created_at: DateTime<Utc>,
}

/// Schedule unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(pub Uuid);

impl ScheduleId {
    /// Generate a new random schedule ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a schedule ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ScheduleIdError> {
        Uuid::parse_str(s)
            .map(ScheduleId)
            .map_err(|e| ScheduleIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ScheduleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Activity value type
///
/// Non-empty, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity(String);

impl Activity {
    const MAX_LENGTH: usize = 128;

    /// Create a validated activity name.
    ///
    /// # Errors
    /// * `Empty` - Activity is empty or whitespace only
    /// * `TooLong` - Activity longer than 128 characters
    pub fn new(activity: String) -> Result<Self, ActivityError> {
        if activity.trim().is_empty() {
            return Err(ActivityError::Empty);
        }
        if activity.len() > Self::MAX_LENGTH {
            return Err(ActivityError::TooLong {
                max: Self::MAX_LENGTH,
                actual: activity.len(),
            });
        }
        Ok(Self(activity))
    }

    /// Get activity as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hours value type
///
/// Positive, at most 24 per calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hours(f64);

impl Hours {
    const MAX_PER_DAY: f64 = 24.0;

    /// Create a validated hours amount.
    ///
    /// # Errors
    /// * `NotPositive` - Hours is zero, negative, or not finite
    /// * `TooLarge` - Hours exceeds 24
    pub fn new(hours: f64) -> Result<Self, HoursError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(HoursError::NotPositive(hours));
        }
        if hours > Self::MAX_PER_DAY {
            return Err(HoursError::TooLarge(hours));
        }
        Ok(Self(hours))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Command to create a new schedule entry
#[derive(Debug)]
pub struct CreateScheduleCommand {
    pub activity: Activity,
    pub hours: Hours,
    pub date: NaiveDate,
    pub planned: bool,
}
