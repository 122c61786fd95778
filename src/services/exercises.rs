//! Exercise catalog service

use tracing::debug;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{Exercise, ExerciseCreate, ExerciseUpdate, MUSCLE_GROUPS};
use crate::seed;

/// In-memory exercise catalog
pub struct ExerciseService {
    config: SimConfig,
    exercises: Vec<Exercise>,
    next_id: i64,
}

impl ExerciseService {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            exercises: Vec::new(),
            next_id: 1,
        }
    }

    pub fn seeded(config: SimConfig) -> Self {
        let exercises = seed::seed_exercises();
        let next_id = exercises.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            config,
            exercises,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    pub fn list(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: i64) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn by_muscle_group(&self, muscle_group: &str) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect()
    }

    pub async fn create(&mut self, data: ExerciseCreate) -> Result<Exercise> {
        if data.name.trim().is_empty() {
            return Err(Error::validation("exercise name is required"));
        }
        if !MUSCLE_GROUPS.contains(&data.muscle_group.as_str()) {
            return Err(Error::validation(format!(
                "unknown muscle group: {}",
                data.muscle_group
            )));
        }

        self.simulate_latency().await;

        let exercise = Exercise {
            id: self.next_id,
            name: data.name,
            muscle_group: data.muscle_group,
            description: data.description,
        };
        self.next_id += 1;

        debug!(id = exercise.id, name = %exercise.name, "exercise created");
        self.exercises.push(exercise.clone());
        Ok(exercise)
    }

    pub async fn update(&mut self, id: i64, update: ExerciseUpdate) -> Result<Exercise> {
        if let Some(ref muscle_group) = update.muscle_group {
            if !MUSCLE_GROUPS.contains(&muscle_group.as_str()) {
                return Err(Error::validation(format!("unknown muscle group: {muscle_group}")));
            }
        }

        self.simulate_latency().await;

        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::not_found("exercise", id))?;

        exercise.apply(update);
        debug!(id, "exercise updated");
        Ok(exercise.clone())
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.simulate_latency().await;

        let index = self
            .exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::not_found("exercise", id))?;

        self.exercises.remove(index);
        debug!(id, "exercise deleted");
        Ok(())
    }
}
