//! Nutrition plan model
//!
//! Named plans with daily macro targets and a per-meal calorie distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{MacroTotals, MealType};

/// A nutrition plan with absolute daily macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: i64,
    pub name: String,
    pub objective: String,
    /// Absolute daily targets: calories plus grams per macro
    pub targets: MacroTotals,
    pub duration: String,
    pub description: String,
    /// Meal type to percentage of daily calories; not validated to sum to 100
    pub calorie_distribution: BTreeMap<MealType, f64>,
    /// Catalog food ids recommended on this plan
    pub recommended_foods: Vec<i64>,
    pub foods_to_avoid: Vec<String>,
}

/// Data for creating a nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreate {
    pub name: String,
    pub objective: String,
    pub targets: MacroTotals,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub calorie_distribution: BTreeMap<MealType, f64>,
    #[serde(default)]
    pub recommended_foods: Vec<i64>,
    #[serde(default)]
    pub foods_to_avoid: Vec<String>,
}

impl NutritionPlan {
    /// Calorie target for one meal type, from the distribution percentage
    ///
    /// Meal types absent from the distribution get 0.
    pub fn meal_calorie_target(&self, meal_type: MealType) -> f64 {
        let pct = self.calorie_distribution.get(&meal_type).copied().unwrap_or(0.0);
        self.targets.calories * pct / 100.0
    }
}
