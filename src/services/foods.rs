//! Food catalog service
//!
//! Owns the in-memory food collection for a session.

use tracing::debug;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::models::{Food, FoodCreate, FoodUpdate, Portion, DEFAULT_PORTION_KEY, FOOD_CATEGORIES};
use crate::seed;

/// In-memory food catalog
pub struct FoodService {
    config: SimConfig,
    foods: Vec<Food>,
    next_id: i64,
}

impl FoodService {
    /// Create an empty catalog
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            foods: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog seeded from fixtures
    pub fn seeded(config: SimConfig) -> Self {
        let foods = seed::seed_foods();
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            config,
            foods,
            next_id,
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    pub fn list(&self) -> &[Food] {
        &self.foods
    }

    pub fn get(&self, id: i64) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Filter by case-insensitive name substring and optional exact category
    pub fn filtered(&self, search: &str, category: Option<&str>) -> Vec<&Food> {
        let needle = search.to_lowercase();
        self.foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .filter(|food| category.map_or(true, |c| food.category == c))
            .collect()
    }

    /// Add a food to the catalog
    ///
    /// The default 100 g portion is injected when the caller defines no
    /// portion under that key, keeping the at-least-one-portion invariant.
    pub async fn create(&mut self, data: FoodCreate) -> Result<Food> {
        if data.name.trim().is_empty() {
            return Err(Error::validation("food name is required"));
        }
        if !FOOD_CATEGORIES.contains(&data.category.as_str()) {
            return Err(Error::validation(format!(
                "unknown food category: {}",
                data.category
            )));
        }

        self.simulate_latency().await;

        let mut portions = data.portions;
        portions
            .entry(DEFAULT_PORTION_KEY.to_string())
            .or_insert_with(|| Portion::new(1.0, "100 grams"));

        let food = Food {
            id: self.next_id,
            name: data.name,
            category: data.category,
            calories: data.calories,
            protein: data.protein,
            carbs: data.carbs,
            fat: data.fat,
            fiber: data.fiber,
            sugar: data.sugar,
            portions,
        };
        self.next_id += 1;

        debug!(id = food.id, name = %food.name, "food created");
        self.foods.push(food.clone());
        Ok(food)
    }

    /// Update a food; later meals snapshot the new values, past meals keep
    /// their copies
    pub async fn update(&mut self, id: i64, update: FoodUpdate) -> Result<Food> {
        if let Some(ref category) = update.category {
            if !FOOD_CATEGORIES.contains(&category.as_str()) {
                return Err(Error::validation(format!("unknown food category: {category}")));
            }
        }

        self.simulate_latency().await;

        let food = self
            .foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(Error::not_found("food", id))?;

        food.apply(update);
        debug!(id, "food updated");
        Ok(food.clone())
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.simulate_latency().await;

        let index = self
            .foods
            .iter()
            .position(|f| f.id == id)
            .ok_or(Error::not_found("food", id))?;

        self.foods.remove(index);
        debug!(id, "food deleted");
        Ok(())
    }
}
