//! Nutrition plan registry
//!
//! A set of named plans with exactly one active at a time. The active plan
//! is tracked here, not as a flag on the plan itself.

use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{MacroTotals, NutritionPlan, PlanCreate};
use crate::nutrition::{compute_progress, DayProgress};
use crate::seed;

/// In-memory plan registry with an active-plan reference
pub struct PlanService {
    config: SimConfig,
    plans: Vec<NutritionPlan>,
    active_id: Option<i64>,
    next_id: i64,
}

impl PlanService {
    /// Create an empty registry with no active plan
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            plans: Vec::new(),
            active_id: None,
            next_id: 1,
        }
    }

    /// Create a registry seeded from fixtures, activating the first plan
    pub fn seeded(config: SimConfig) -> Self {
        let plans = seed::seed_plans();
        let active_id = plans.first().map(|p| p.id);
        let next_id = plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            config,
            plans,
            active_id,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    pub fn list(&self) -> &[NutritionPlan] {
        &self.plans
    }

    pub fn get(&self, id: i64) -> Option<&NutritionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// The currently active plan, if any
    pub fn active(&self) -> Option<&NutritionPlan> {
        self.active_id.and_then(|id| self.get(id))
    }

    /// Switch the active plan
    ///
    /// An unknown id is reported instead of silently keeping the previous
    /// plan; the previous plan stays active either way.
    pub fn activate(&mut self, id: i64) -> Result<()> {
        if self.get(id).is_none() {
            return Err(Error::not_found("plan", id));
        }
        self.active_id = Some(id);
        info!(id, "plan activated");
        Ok(())
    }

    pub async fn create(&mut self, data: PlanCreate) -> Result<NutritionPlan> {
        if data.name.trim().is_empty() {
            return Err(Error::validation("plan name is required"));
        }

        self.simulate_latency().await;

        let plan = NutritionPlan {
            id: self.next_id,
            name: data.name,
            objective: data.objective,
            targets: data.targets,
            duration: data.duration,
            description: data.description,
            calorie_distribution: data.calorie_distribution,
            recommended_foods: data.recommended_foods,
            foods_to_avoid: data.foods_to_avoid,
        };
        self.next_id += 1;

        debug!(id = plan.id, name = %plan.name, "plan created");
        self.plans.push(plan.clone());
        Ok(plan)
    }

    /// Compare day totals against the active plan's targets
    pub fn progress_for(&self, day_totals: &MacroTotals) -> Option<DayProgress> {
        compute_progress(day_totals, self.active())
    }
}
