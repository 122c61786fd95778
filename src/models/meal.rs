//! Meal model
//!
//! A logged meal: a calendar date, a meal type, and the foods consumed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Food, MacroTotals};

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    MidMorning,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::MidMorning => "mid_morning",
            MealType::Lunch => "lunch",
            MealType::Snack => "snack",
            MealType::Dinner => "dinner",
        }
    }

    /// All meal types in day order
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::MidMorning,
        MealType::Lunch,
        MealType::Snack,
        MealType::Dinner,
    ];
}

/// One food consumed within a meal
///
/// Holds a value copy of the catalog food taken at log time, so later
/// catalog edits never change past meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFoodEntry {
    pub food: Food,
    /// Key into the food's portion map
    pub portion: String,
    /// Count of that portion, positive
    pub quantity: f64,
}

impl MealFoodEntry {
    pub fn new(food: Food, portion: impl Into<String>, quantity: f64) -> Self {
        Self {
            food,
            portion: portion.into(),
            quantity,
        }
    }
}

/// A logged meal with cached macro totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub entries: Vec<MealFoodEntry>,
    pub notes: String,
    /// Derived from entries at creation, recomputed wholesale on update
    pub totals: MacroTotals,
}

/// Data for logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDraft {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub entries: Vec<MealFoodEntry>,
    #[serde(default)]
    pub notes: String,
}

/// Data for updating a meal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealUpdate {
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    /// Replacing entries triggers a wholesale totals recomputation
    pub entries: Option<Vec<MealFoodEntry>>,
    pub notes: Option<String>,
}
