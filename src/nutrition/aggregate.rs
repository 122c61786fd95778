//! Macro aggregation
//!
//! Pure projections from meal entries to meal and day totals.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{MacroTotals, Meal, MealFoodEntry};

/// Compute cached totals for a meal from its entries
///
/// Each entry contributes `food.macro * portion.multiplier * quantity` per
/// macro. The summed result is rounded to 2 decimal places. An empty entry
/// list yields all-zero totals. A portion key missing from the entry's food
/// surfaces as [`Error::UnknownPortion`].
pub fn compute_meal_totals(entries: &[MealFoodEntry]) -> Result<MacroTotals> {
    let mut totals = MacroTotals::zero();

    for entry in entries {
        let portion = entry.food.portion(&entry.portion).ok_or_else(|| Error::UnknownPortion {
            food: entry.food.name.clone(),
            portion: entry.portion.clone(),
        })?;
        let multiplier = portion.multiplier * entry.quantity;
        totals = totals + entry.food.macros().scale(multiplier);
    }

    Ok(totals.round2())
}

/// Sum cached meal totals for one calendar date
///
/// Exact day match, not a range. Meal-level totals are already rounded, so
/// no rounding is applied here. Zero meals on the date yields zeros.
pub fn compute_day_totals(meals: &[Meal], date: NaiveDate) -> MacroTotals {
    meals
        .iter()
        .filter(|meal| meal.date == date)
        .map(|meal| meal.totals)
        .sum()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Food, MealType, Portion};

    fn chicken_breast() -> Food {
        let mut portions = BTreeMap::new();
        portions.insert("100g".to_string(), Portion::new(1.0, "100 grams"));
        portions.insert("150g".to_string(), Portion::new(1.5, "150 grams (large)"));
        portions.insert("80g".to_string(), Portion::new(0.8, "80 grams (small)"));
        Food {
            id: 1,
            name: "Chicken Breast".to_string(),
            category: "Proteins".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            fiber: 0.0,
            sugar: 0.0,
            portions,
        }
    }

    fn brown_rice() -> Food {
        let mut portions = BTreeMap::new();
        portions.insert("100g".to_string(), Portion::new(1.0, "100 grams"));
        portions.insert("80g".to_string(), Portion::new(0.8, "80 grams (1/2 cup)"));
        Food {
            id: 2,
            name: "Brown Rice".to_string(),
            category: "Carbohydrates".to_string(),
            calories: 111.0,
            protein: 2.6,
            carbs: 22.0,
            fat: 0.9,
            fiber: 1.8,
            sugar: 0.4,
            portions,
        }
    }

    fn meal_on(date: &str, totals: MacroTotals) -> Meal {
        Meal {
            id: 0,
            date: date.parse().unwrap(),
            meal_type: MealType::Lunch,
            entries: vec![],
            notes: String::new(),
            totals,
        }
    }

    #[test]
    fn test_empty_entries_yield_zero() {
        let totals = compute_meal_totals(&[]).unwrap();
        assert_eq!(totals, MacroTotals::zero());
    }

    #[test]
    fn test_single_entry_scales_by_portion_and_quantity() {
        let entry = MealFoodEntry::new(chicken_breast(), "150g", 1.0);
        let totals = compute_meal_totals(&[entry]).unwrap();
        assert!((totals.calories - 247.5).abs() < 0.001);
        assert!((totals.protein - 46.5).abs() < 0.001);
        assert!((totals.carbs - 0.0).abs() < 0.001);
        assert!((totals.fat - 5.4).abs() < 0.001);
    }

    #[test]
    fn test_quantity_multiplies_portion() {
        let entry = MealFoodEntry::new(brown_rice(), "80g", 2.0);
        let totals = compute_meal_totals(&[entry]).unwrap();
        // 111 * 0.8 * 2
        assert!((totals.calories - 177.6).abs() < 0.001);
    }

    #[test]
    fn test_reordering_entries_is_invariant() {
        let a = MealFoodEntry::new(chicken_breast(), "150g", 1.0);
        let b = MealFoodEntry::new(brown_rice(), "100g", 1.0);
        let forward = compute_meal_totals(&[a.clone(), b.clone()]).unwrap();
        let reversed = compute_meal_totals(&[b, a]).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_unknown_portion_is_an_error() {
        let entry = MealFoodEntry::new(chicken_breast(), "1 cup", 1.0);
        let err = compute_meal_totals(&[entry]).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownPortion {
                food: "Chicken Breast".to_string(),
                portion: "1 cup".to_string(),
            }
        );
    }

    #[test]
    fn test_day_totals_empty_date() {
        let meals = vec![meal_on("2025-10-01", MacroTotals::new(262.4, 8.12, 54.6, 3.16))];
        let totals = compute_day_totals(&meals, "2025-10-02".parse().unwrap());
        assert_eq!(totals, MacroTotals::zero());
    }

    #[test]
    fn test_day_totals_sums_cached_totals() {
        let meals = vec![
            meal_on("2025-10-01", MacroTotals::new(262.4, 8.12, 54.6, 3.16)),
            meal_on("2025-10-01", MacroTotals::new(408.5, 50.7, 32.5, 6.0)),
            meal_on("2025-10-02", MacroTotals::new(100.0, 1.0, 2.0, 3.0)),
        ];
        let totals = compute_day_totals(&meals, "2025-10-01".parse().unwrap());
        assert!((totals.calories - 670.9).abs() < 0.001);
        assert!((totals.protein - 58.82).abs() < 0.001);
        assert!((totals.carbs - 87.1).abs() < 0.001);
        assert!((totals.fat - 9.16).abs() < 0.001);
    }
}
