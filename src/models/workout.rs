//! Scheduled workout model
//!
//! A routine placed on the calendar, with a status lifecycle.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::Routine;

/// Workout status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Scheduled => "scheduled",
            WorkoutStatus::Completed => "completed",
            WorkoutStatus::Cancelled => "cancelled",
        }
    }
}

/// A workout scheduled on a calendar date
///
/// Carries a value copy of the routine taken at scheduling time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub routine_id: i64,
    pub routine: Routine,
    pub status: WorkoutStatus,
    pub notes: String,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Data for scheduling a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub routine_id: i64,
    #[serde(default)]
    pub notes: String,
}

/// Data for updating a scheduled workout
///
/// Setting `routine_id` re-points the workout at another routine; the
/// schedule service resolves the id and takes a fresh snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub routine_id: Option<i64>,
    pub notes: Option<String>,
}

impl ScheduledWorkout {
    /// Merge the plain fields; routine re-pointing happens in the service
    pub fn apply(&mut self, update: WorkoutUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}
