//! Food model
//!
//! A catalog food with macro values per 100 grams and named portions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::MacroTotals;

/// Known food categories
pub const FOOD_CATEGORIES: &[&str] = &[
    "Proteins",
    "Carbohydrates",
    "Healthy Fats",
    "Fruits",
    "Vegetables",
    "Dairy",
    "Grains",
    "Legumes",
];

/// Portion key for the 100 g baseline, injected when a food defines no portions
pub const DEFAULT_PORTION_KEY: &str = "100g";

/// A named portion: a multiplier against the per-100g baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Multiplier relative to the 100 g baseline (1.0 = 100 g)
    pub multiplier: f64,
    pub display_name: String,
}

impl Portion {
    pub fn new(multiplier: f64, display_name: impl Into<String>) -> Self {
        Self {
            multiplier,
            display_name: display_name.into(),
        }
    }
}

/// A catalog food item
///
/// Macro values are defined per 100 grams. Every food holds at least one
/// portion entry; the portion map is ordered for deterministic listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub calories: f64, // per 100g
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub portions: BTreeMap<String, Portion>,
}

/// Data for creating a food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub portions: BTreeMap<String, Portion>,
}

/// Data for updating a food
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub portions: Option<BTreeMap<String, Portion>>,
}

impl Food {
    /// Macro baseline as totals, for scaling by portion multipliers
    pub fn macros(&self) -> MacroTotals {
        MacroTotals::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Look up a portion by key
    pub fn portion(&self, key: &str) -> Option<&Portion> {
        self.portions.get(key)
    }

    /// Apply an update, merging set fields over current values
    pub fn apply(&mut self, update: FoodUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(protein) = update.protein {
            self.protein = protein;
        }
        if let Some(carbs) = update.carbs {
            self.carbs = carbs;
        }
        if let Some(fat) = update.fat {
            self.fat = fat;
        }
        if let Some(fiber) = update.fiber {
            self.fiber = fiber;
        }
        if let Some(sugar) = update.sugar {
            self.sugar = sugar;
        }
        if let Some(portions) = update.portions {
            self.portions = portions;
        }
    }
}
