//! Exercise model
//!
//! Catalog exercises grouped by target muscle.

use serde::{Deserialize, Serialize};

/// Available muscle groups
pub const MUSCLE_GROUPS: &[&str] = &[
    "Biceps",
    "Triceps",
    "Chest",
    "Back",
    "Shoulders",
    "Legs",
    "Abs",
    "Glutes",
];

/// A catalog exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
    pub description: String,
}

/// Data for creating an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub muscle_group: String,
    #[serde(default)]
    pub description: String,
}

/// Data for updating an exercise
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub muscle_group: Option<String>,
    pub description: Option<String>,
}

impl Exercise {
    pub fn apply(&mut self, update: ExerciseUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(muscle_group) = update.muscle_group {
            self.muscle_group = muscle_group;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}
