//! Progress and weekly statistics
//!
//! Comparisons of day totals against the active plan's targets, plus a
//! rolling weekly summary. All derived, never stored.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::{MacroTotals, Meal, NutritionPlan};

/// Actual vs target for one macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub actual: f64,
    pub target: f64,
    /// Integer percentage, nearest; not clamped, may exceed 100
    pub percentage: i64,
}

/// Day progress across the four macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

/// Presentation band for a progress percentage
///
/// Bands are inclusive on their lower bound: under < 70, low 70..90,
/// on-target 90..=110, over > 110.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Under,
    Low,
    OnTarget,
    Over,
}

impl ProgressBand {
    pub fn for_percentage(percentage: i64) -> Self {
        if percentage < 70 {
            ProgressBand::Under
        } else if percentage < 90 {
            ProgressBand::Low
        } else if percentage <= 110 {
            ProgressBand::OnTarget
        } else {
            ProgressBand::Over
        }
    }
}

/// Weekly tracking summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyStats {
    /// Distinct calendar days with at least one meal in the window
    pub days_tracked: usize,
    pub total_meals: usize,
    pub average_calories: i64,
    pub average_protein: i64,
    /// `round(days_tracked / 7 * 100)`
    pub consistency: i64,
}

/// Integer percentage of actual against target, nearest
///
/// A zero target yields 0 rather than dividing by zero.
fn percentage_of(actual: f64, target: f64) -> i64 {
    if target == 0.0 {
        return 0;
    }
    (actual / target * 100.0).round() as i64
}

fn macro_progress(actual: f64, target: f64) -> MacroProgress {
    MacroProgress {
        actual,
        target,
        percentage: percentage_of(actual, target),
    }
}

/// Compare day totals against a plan's targets
///
/// Returns `None` when no plan is active; the caller treats that as
/// "no progress to show", not an error.
pub fn compute_progress(day_totals: &MacroTotals, plan: Option<&NutritionPlan>) -> Option<DayProgress> {
    let plan = plan?;

    Some(DayProgress {
        calories: macro_progress(day_totals.calories, plan.targets.calories),
        protein: macro_progress(day_totals.protein, plan.targets.protein),
        carbs: macro_progress(day_totals.carbs, plan.targets.carbs),
        fat: macro_progress(day_totals.fat, plan.targets.fat),
    })
}

/// Summarize the trailing week of meal tracking
///
/// The window is `today - 7 days ..= today` with inclusive comparison on
/// both ends, so up to 8 calendar days can land in range. Averages divide
/// by the number of tracked days, not by 7.
pub fn compute_weekly_stats(meals: &[Meal], today: NaiveDate) -> WeeklyStats {
    let week_start = today - Days::new(7);

    let week_meals: Vec<&Meal> = meals
        .iter()
        .filter(|meal| meal.date >= week_start && meal.date <= today)
        .collect();

    let days_tracked = week_meals
        .iter()
        .map(|meal| meal.date)
        .collect::<HashSet<_>>()
        .len();

    let totals: MacroTotals = week_meals.iter().map(|meal| meal.totals).sum();

    let average = |value: f64| -> i64 {
        if days_tracked == 0 {
            0
        } else {
            (value / days_tracked as f64).round() as i64
        }
    };

    WeeklyStats {
        days_tracked,
        total_meals: week_meals.len(),
        average_calories: average(totals.calories),
        average_protein: average(totals.protein),
        consistency: (days_tracked as f64 / 7.0 * 100.0).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::MealType;

    fn plan(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutritionPlan {
        NutritionPlan {
            id: 1,
            name: "Cutting Plan".to_string(),
            objective: "Fat loss".to_string(),
            targets: MacroTotals::new(calories, protein, carbs, fat),
            duration: "8 weeks".to_string(),
            description: String::new(),
            calorie_distribution: BTreeMap::new(),
            recommended_foods: vec![],
            foods_to_avoid: vec![],
        }
    }

    fn meal_on(date: &str, calories: f64, protein: f64) -> Meal {
        Meal {
            id: 0,
            date: date.parse().unwrap(),
            meal_type: MealType::Dinner,
            entries: vec![],
            notes: String::new(),
            totals: MacroTotals::new(calories, protein, 0.0, 0.0),
        }
    }

    #[test]
    fn test_no_active_plan_yields_none() {
        let totals = MacroTotals::new(1800.0, 100.0, 150.0, 50.0);
        assert!(compute_progress(&totals, None).is_none());
    }

    #[test]
    fn test_percentages_round_to_nearest() {
        let totals = MacroTotals::new(1800.0, 70.0, 60.0, 20.0);
        let plan = plan(1800.0, 140.0, 180.0, 60.0);
        let progress = compute_progress(&totals, Some(&plan)).unwrap();

        assert_eq!(progress.calories.percentage, 100);
        assert_eq!(progress.protein.percentage, 50);
        assert_eq!(progress.carbs.percentage, 33);
        assert_eq!(progress.fat.percentage, 33);
        assert_eq!(progress.calories.actual, 1800.0);
        assert_eq!(progress.calories.target, 1800.0);
    }

    #[test]
    fn test_over_target_is_not_clamped() {
        let totals = MacroTotals::new(900.0, 0.0, 0.0, 0.0);
        let plan = plan(600.0, 140.0, 180.0, 60.0);
        let progress = compute_progress(&totals, Some(&plan)).unwrap();
        assert_eq!(progress.calories.percentage, 150);
    }

    #[test]
    fn test_zero_target_yields_zero_percentage() {
        let totals = MacroTotals::new(500.0, 40.0, 0.0, 10.0);
        let plan = plan(1800.0, 140.0, 0.0, 60.0);
        let progress = compute_progress(&totals, Some(&plan)).unwrap();
        assert_eq!(progress.carbs.percentage, 0);
    }

    #[test]
    fn test_bands_inclusive_lower_bounds() {
        assert_eq!(ProgressBand::for_percentage(69), ProgressBand::Under);
        assert_eq!(ProgressBand::for_percentage(70), ProgressBand::Low);
        assert_eq!(ProgressBand::for_percentage(89), ProgressBand::Low);
        assert_eq!(ProgressBand::for_percentage(90), ProgressBand::OnTarget);
        assert_eq!(ProgressBand::for_percentage(110), ProgressBand::OnTarget);
        assert_eq!(ProgressBand::for_percentage(111), ProgressBand::Over);
    }

    #[test]
    fn test_weekly_stats_empty_window() {
        let stats = compute_weekly_stats(&[], "2025-10-08".parse().unwrap());
        assert_eq!(stats, WeeklyStats::default());
    }

    #[test]
    fn test_weekly_stats_averages_by_tracked_days() {
        let meals = vec![
            meal_on("2025-10-06", 400.0, 30.0),
            meal_on("2025-10-06", 600.0, 20.0),
            meal_on("2025-10-07", 500.0, 40.0),
            // Outside the window
            meal_on("2025-09-30", 900.0, 90.0),
        ];
        let stats = compute_weekly_stats(&meals, "2025-10-08".parse().unwrap());

        assert_eq!(stats.days_tracked, 2);
        assert_eq!(stats.total_meals, 3);
        assert_eq!(stats.average_calories, 750);
        assert_eq!(stats.average_protein, 45);
        assert_eq!(stats.consistency, 29);
    }

    #[test]
    fn test_weekly_window_is_inclusive_on_both_ends() {
        let meals = vec![
            meal_on("2025-10-01", 100.0, 10.0), // today - 7, still in range
            meal_on("2025-10-08", 200.0, 20.0), // today
        ];
        let stats = compute_weekly_stats(&meals, "2025-10-08".parse().unwrap());
        assert_eq!(stats.total_meals, 2);
        assert_eq!(stats.days_tracked, 2);
    }
}
