//! Routine model
//!
//! A workout routine: a set of exercises with sets/reps/weight, assigned
//! to days of the week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// An exercise as prescribed inside a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
    /// Catalog exercise id this prescription was built from
    pub exercise_id: i64,
    pub name: String,
    pub muscle_group: String,
    pub description: String,
    pub sets: u32,
    pub reps: u32,
    /// 0 for bodyweight exercises
    pub weight_kg: f64,
}

/// A workout routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: i64,
    pub title: String,
    pub days: Vec<Weekday>,
    pub exercises: Vec<RoutineExercise>,
}

/// Data for creating a routine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineCreate {
    pub title: String,
    #[serde(default)]
    pub days: Vec<Weekday>,
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

/// Data for updating a routine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineUpdate {
    pub title: Option<String>,
    pub days: Option<Vec<Weekday>>,
    pub exercises: Option<Vec<RoutineExercise>>,
}

impl Routine {
    pub fn apply(&mut self, update: RoutineUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(days) = update.days {
            self.days = days;
        }
        if let Some(exercises) = update.exercises {
            self.exercises = exercises;
        }
    }
}
