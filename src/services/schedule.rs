//! Workout schedule service
//!
//! Places routines on the calendar and tracks their status lifecycle.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{ScheduledWorkout, WorkoutDraft, WorkoutStatus, WorkoutUpdate};
use crate::seed;
use crate::services::RoutineService;

/// Per-status workout counts for the current week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekScheduleStats {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub cancelled: usize,
}

/// In-memory workout schedule
pub struct ScheduleService {
    config: SimConfig,
    workouts: Vec<ScheduledWorkout>,
    next_id: i64,
}

impl ScheduleService {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            workouts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn seeded(config: SimConfig) -> Self {
        let workouts = seed::seed_scheduled_workouts();
        let next_id = workouts.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        Self {
            config,
            workouts,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    pub fn list(&self) -> &[ScheduledWorkout] {
        &self.workouts
    }

    pub fn get(&self, id: i64) -> Option<&ScheduledWorkout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn workouts_on(&self, date: NaiveDate) -> Vec<&ScheduledWorkout> {
        self.workouts.iter().filter(|w| w.date == date).collect()
    }

    /// Schedule a routine on the calendar
    ///
    /// The routine is resolved against the injected registry and snapshotted
    /// by value into the workout.
    pub async fn schedule(
        &mut self,
        draft: WorkoutDraft,
        routines: &RoutineService,
    ) -> Result<ScheduledWorkout> {
        let routine = routines
            .get(draft.routine_id)
            .ok_or(Error::not_found("routine", draft.routine_id))?
            .clone();

        self.simulate_latency().await;

        let workout = ScheduledWorkout {
            id: self.next_id,
            date: draft.date,
            time: draft.time,
            routine_id: draft.routine_id,
            routine,
            status: WorkoutStatus::Scheduled,
            notes: draft.notes,
            completed_at: None,
        };
        self.next_id += 1;

        debug!(id = workout.id, date = %workout.date, "workout scheduled");
        self.workouts.push(workout.clone());
        Ok(workout)
    }

    /// Update a scheduled workout
    ///
    /// Changing the routine resolves the new id against the registry and
    /// replaces the snapshot; the old copy is discarded, never merged.
    pub async fn update(
        &mut self,
        id: i64,
        update: WorkoutUpdate,
        routines: &RoutineService,
    ) -> Result<ScheduledWorkout> {
        let repointed = match update.routine_id {
            Some(routine_id) => Some(
                routines
                    .get(routine_id)
                    .ok_or(Error::not_found("routine", routine_id))?
                    .clone(),
            ),
            None => None,
        };

        self.simulate_latency().await;

        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(Error::not_found("workout", id))?;

        workout.apply(update);
        if let Some(routine) = repointed {
            workout.routine_id = routine.id;
            workout.routine = routine;
        }
        debug!(id, "workout updated");
        Ok(workout.clone())
    }

    /// Mark a workout completed, stamping the completion time
    pub async fn complete(&mut self, id: i64, now: DateTime<Utc>) -> Result<ScheduledWorkout> {
        self.simulate_latency().await;

        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(Error::not_found("workout", id))?;

        workout.status = WorkoutStatus::Completed;
        workout.completed_at = Some(now);
        info!(id, status = workout.status.as_str(), "workout completed");
        Ok(workout.clone())
    }

    pub async fn cancel(&mut self, id: i64) -> Result<ScheduledWorkout> {
        self.simulate_latency().await;

        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(Error::not_found("workout", id))?;

        workout.status = WorkoutStatus::Cancelled;
        debug!(id, status = workout.status.as_str(), "workout cancelled");
        Ok(workout.clone())
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.simulate_latency().await;

        let index = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or(Error::not_found("workout", id))?;

        self.workouts.remove(index);
        debug!(id, "workout deleted");
        Ok(())
    }

    /// Per-status counts for the Sunday-anchored week containing today
    pub fn week_stats(&self, today: NaiveDate) -> WeekScheduleStats {
        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
        let week_end = week_start + Days::new(6);

        let mut stats = WeekScheduleStats::default();
        for workout in self
            .workouts
            .iter()
            .filter(|w| w.date >= week_start && w.date <= week_end)
        {
            stats.total += 1;
            match workout.status {
                WorkoutStatus::Completed => stats.completed += 1,
                WorkoutStatus::Scheduled => stats.scheduled += 1,
                WorkoutStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn service() -> ScheduleService {
        ScheduleService::seeded(SimConfig::none())
    }

    fn routines() -> RoutineService {
        RoutineService::seeded(SimConfig::none())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_workouts_on_date() {
        let schedule = service();
        assert_eq!(schedule.workouts_on(date("2025-10-03")).len(), 2);
        assert!(schedule.workouts_on(date("2025-10-07")).is_empty());
    }

    #[tokio::test]
    async fn test_schedule_snapshots_routine() {
        let mut schedule = service();
        let registry = routines();

        let workout = schedule
            .schedule(
                WorkoutDraft {
                    date: date("2025-10-06"),
                    time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                    routine_id: 1,
                    notes: String::new(),
                },
                &registry,
            )
            .await
            .unwrap();

        assert_eq!(workout.id, 6);
        assert_eq!(workout.status, WorkoutStatus::Scheduled);
        assert_eq!(workout.routine.title, "Biceps and Triceps");
    }

    #[tokio::test]
    async fn test_schedule_unknown_routine_is_not_found() {
        let mut schedule = service();
        let registry = routines();

        let err = schedule
            .schedule(
                WorkoutDraft {
                    date: date("2025-10-06"),
                    time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                    routine_id: 42,
                    notes: String::new(),
                },
                &registry,
            )
            .await
            .unwrap_err();
        assert_eq!(err, Error::not_found("routine", 42));
        assert_eq!(schedule.list().len(), 5);
    }

    #[tokio::test]
    async fn test_update_repoints_routine_with_fresh_snapshot() {
        let mut schedule = service();
        let registry = routines();

        // Workout 4 carries a snapshot of a routine no longer in the registry
        assert_eq!(schedule.get(4).unwrap().routine.title, "Full Legs");

        let workout = schedule
            .update(
                4,
                WorkoutUpdate {
                    routine_id: Some(2),
                    ..Default::default()
                },
                &registry,
            )
            .await
            .unwrap();

        assert_eq!(workout.routine_id, 2);
        assert_eq!(workout.routine.title, "Chest and Back");
    }

    #[tokio::test]
    async fn test_update_unknown_routine_is_not_found() {
        let mut schedule = service();
        let registry = routines();

        let err = schedule
            .update(
                1,
                WorkoutUpdate {
                    routine_id: Some(42),
                    ..Default::default()
                },
                &registry,
            )
            .await
            .unwrap_err();
        assert_eq!(err, Error::not_found("routine", 42));
        assert_eq!(schedule.get(1).unwrap().routine_id, 1);
    }

    #[tokio::test]
    async fn test_update_notes_keeps_snapshot() {
        let mut schedule = service();
        let registry = routines();

        let before = schedule.get(2).unwrap().routine.clone();
        let workout = schedule
            .update(
                2,
                WorkoutUpdate {
                    notes: Some("Bring straps".to_string()),
                    ..Default::default()
                },
                &registry,
            )
            .await
            .unwrap();

        assert_eq!(workout.notes, "Bring straps");
        assert_eq!(workout.routine, before);
    }

    #[tokio::test]
    async fn test_complete_sets_status_and_timestamp() {
        let mut schedule = service();
        let now = Utc::now();

        let workout = schedule.complete(1, now).await.unwrap();
        assert_eq!(workout.status, WorkoutStatus::Completed);
        assert_eq!(workout.completed_at, Some(now));
    }

    #[tokio::test]
    async fn test_cancel_keeps_workout_in_list() {
        let mut schedule = service();
        let workout = schedule.cancel(3).await.unwrap();
        assert_eq!(workout.status, WorkoutStatus::Cancelled);
        assert_eq!(schedule.list().len(), 5);
    }

    #[test]
    fn test_week_stats_counts_by_status() {
        let schedule = service();
        // Week of 2025-10-01 (Wednesday): Sunday 09-28 through Saturday 10-04
        let stats = schedule.week_stats(date("2025-10-01"));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.scheduled, 4);
        assert_eq!(stats.cancelled, 0);
    }

    #[test]
    fn test_week_stats_outside_window() {
        let schedule = service();
        let stats = schedule.week_stats(date("2025-11-15"));
        assert_eq!(stats, WeekScheduleStats::default());
    }
}
