//! Meal log service
//!
//! Owns the in-memory meal collection and its cached totals.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{MacroTotals, Meal, MealDraft, MealFoodEntry, MealUpdate};
use crate::nutrition::{compute_day_totals, compute_meal_totals, compute_weekly_stats, WeeklyStats};
use crate::seed;

/// In-memory meal log
pub struct MealService {
    config: SimConfig,
    meals: Vec<Meal>,
    next_id: i64,
}

impl MealService {
    /// Create an empty log
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            meals: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a log seeded from fixtures
    pub fn seeded(config: SimConfig) -> Self {
        let meals = seed::seed_meals();
        let next_id = meals.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            config,
            meals,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    fn validate_entries(draft_entries: &[MealFoodEntry]) -> Result<()> {
        if draft_entries.is_empty() {
            return Err(Error::validation("a meal needs at least one food entry"));
        }
        if draft_entries.iter().any(|e| e.quantity <= 0.0) {
            return Err(Error::validation("entry quantity must be greater than 0"));
        }
        Ok(())
    }

    pub fn list(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, id: i64) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn meals_by_date(&self, date: NaiveDate) -> Vec<&Meal> {
        self.meals.iter().filter(|m| m.date == date).collect()
    }

    /// Sum cached totals for one calendar date
    pub fn day_totals(&self, date: NaiveDate) -> MacroTotals {
        compute_day_totals(&self.meals, date)
    }

    /// Weekly summary for the window ending today
    pub fn weekly_stats(&self, today: NaiveDate) -> WeeklyStats {
        compute_weekly_stats(&self.meals, today)
    }

    /// Log a meal, computing its cached totals from the entries
    pub async fn log(&mut self, draft: MealDraft) -> Result<Meal> {
        Self::validate_entries(&draft.entries)?;

        self.simulate_latency().await;

        let totals = compute_meal_totals(&draft.entries)?;
        let meal = Meal {
            id: self.next_id,
            date: draft.date,
            meal_type: draft.meal_type,
            entries: draft.entries,
            notes: draft.notes,
            totals,
        };
        self.next_id += 1;

        debug!(
            id = meal.id,
            date = %meal.date,
            meal_type = meal.meal_type.as_str(),
            "meal logged"
        );
        self.meals.push(meal.clone());
        Ok(meal)
    }

    /// Update a meal
    ///
    /// Replacing the entries recomputes the cached totals wholesale, never
    /// incrementally.
    pub async fn update(&mut self, id: i64, update: MealUpdate) -> Result<Meal> {
        if let Some(ref entries) = update.entries {
            Self::validate_entries(entries)?;
        }

        self.simulate_latency().await;

        let new_totals = match update.entries {
            Some(ref entries) => Some(compute_meal_totals(entries)?),
            None => None,
        };

        let meal = self
            .meals
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(Error::not_found("meal", id))?;

        if let Some(date) = update.date {
            meal.date = date;
        }
        if let Some(meal_type) = update.meal_type {
            meal.meal_type = meal_type;
        }
        if let Some(notes) = update.notes {
            meal.notes = notes;
        }
        if let (Some(entries), Some(totals)) = (update.entries, new_totals) {
            meal.entries = entries;
            meal.totals = totals;
        }

        debug!(id, "meal updated");
        Ok(meal.clone())
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.simulate_latency().await;

        let index = self
            .meals
            .iter()
            .position(|m| m.id == id)
            .ok_or(Error::not_found("meal", id))?;

        self.meals.remove(index);
        debug!(id, "meal deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealFoodEntry, MealType};
    use crate::seed::seed_foods;

    fn service() -> MealService {
        MealService::seeded(SimConfig::none())
    }

    fn food(id: i64) -> crate::models::Food {
        seed_foods().into_iter().find(|f| f.id == id).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_seeded_day_totals_sum_cached_values() {
        let meals = service();
        let totals = meals.day_totals(date("2025-10-01"));
        assert!((totals.calories - 670.9).abs() < 0.001);
    }

    #[test]
    fn test_meals_by_date_exact_match() {
        let meals = service();
        assert_eq!(meals.meals_by_date(date("2025-10-01")).len(), 2);
        assert!(meals.meals_by_date(date("2025-10-02")).is_empty());
    }

    #[tokio::test]
    async fn test_log_computes_cached_totals() {
        let mut meals = service();
        let meal = meals
            .log(MealDraft {
                date: date("2025-10-02"),
                meal_type: MealType::Dinner,
                entries: vec![MealFoodEntry::new(food(1), "150g", 1.0)],
                notes: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(meal.id, 3);
        assert!((meal.totals.calories - 247.5).abs() < 0.001);
        assert!((meal.totals.protein - 46.5).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_log_rejects_empty_and_nonpositive_entries() {
        let mut meals = service();

        let err = meals
            .log(MealDraft {
                date: date("2025-10-02"),
                meal_type: MealType::Snack,
                entries: vec![],
                notes: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = meals
            .log(MealDraft {
                date: date("2025-10-02"),
                meal_type: MealType::Snack,
                entries: vec![MealFoodEntry::new(food(4), "120g", 0.0)],
                notes: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_replacing_entries_recomputes_totals() {
        let mut meals = service();
        let updated = meals
            .update(
                1,
                MealUpdate {
                    entries: Some(vec![MealFoodEntry::new(food(5), "40g", 1.0)]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // 389 * 0.4
        assert!((updated.totals.calories - 155.6).abs() < 0.001);
        assert!((updated.totals.protein - 6.8).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_update_notes_keeps_totals() {
        let mut meals = service();
        let before = meals.get(2).unwrap().totals;
        let updated = meals
            .update(
                2,
                MealUpdate {
                    notes: Some("Light lunch".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.totals, before);
        assert_eq!(updated.notes, "Light lunch");
    }

    #[tokio::test]
    async fn test_delete_missing_meal_is_not_found() {
        let mut meals = service();
        let err = meals.delete(42).await.unwrap_err();
        assert_eq!(err, Error::not_found("meal", 42));
    }
}
