//! Shared macro totals structure
//!
//! Used across foods, meals, day totals, and plan targets.

use serde::{Deserialize, Serialize};

/// Totals for the four tracked macros
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl MacroTotals {
    /// Create a new MacroTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Scale all macros by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another totals to this one
    pub fn add(&self, other: &MacroTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// Round every macro to 2 decimal places (half-up)
    pub fn round2(&self) -> Self {
        Self {
            calories: round2(self.calories),
            protein: round2(self.protein),
            carbs: round2(self.carbs),
            fat: round2(self.fat),
        }
    }
}

/// Round to 2 decimal places, half-up for positive values
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for MacroTotals {
    type Output = MacroTotals;

    fn mul(self, multiplier: f64) -> MacroTotals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, t| acc + t)
    }
}
