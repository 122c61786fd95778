//! Routine service

use tracing::debug;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{Routine, RoutineCreate, RoutineUpdate};
use crate::seed;

/// In-memory routine collection
pub struct RoutineService {
    config: SimConfig,
    routines: Vec<Routine>,
    next_id: i64,
}

impl RoutineService {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            routines: Vec::new(),
            next_id: 1,
        }
    }

    pub fn seeded(config: SimConfig) -> Self {
        let routines = seed::seed_routines();
        let next_id = routines.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            config,
            routines,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    pub fn list(&self) -> &[Routine] {
        &self.routines
    }

    pub fn get(&self, id: i64) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub async fn create(&mut self, data: RoutineCreate) -> Result<Routine> {
        if data.title.trim().is_empty() {
            return Err(Error::validation("routine title is required"));
        }

        self.simulate_latency().await;

        let routine = Routine {
            id: self.next_id,
            title: data.title,
            days: data.days,
            exercises: data.exercises,
        };
        self.next_id += 1;

        debug!(id = routine.id, title = %routine.title, "routine created");
        self.routines.push(routine.clone());
        Ok(routine)
    }

    pub async fn update(&mut self, id: i64, update: RoutineUpdate) -> Result<Routine> {
        self.simulate_latency().await;

        let routine = self
            .routines
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::not_found("routine", id))?;

        routine.apply(update);
        debug!(id, "routine updated");
        Ok(routine.clone())
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.simulate_latency().await;

        let index = self
            .routines
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::not_found("routine", id))?;

        self.routines.remove(index);
        debug!(id, "routine deleted");
        Ok(())
    }
}
