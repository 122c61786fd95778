//! Data models
//!
//! Plain data structs owned by the in-memory session state.

mod exercise;
mod food;
mod macros;
mod meal;
mod plan;
mod routine;
mod workout;

pub use exercise::{Exercise, ExerciseCreate, ExerciseUpdate, MUSCLE_GROUPS};
pub use food::{Food, FoodCreate, FoodUpdate, Portion, DEFAULT_PORTION_KEY, FOOD_CATEGORIES};
pub use macros::{round2, MacroTotals};
pub use meal::{Meal, MealDraft, MealFoodEntry, MealType, MealUpdate};
pub use plan::{NutritionPlan, PlanCreate};
pub use routine::{Routine, RoutineCreate, RoutineExercise, RoutineUpdate};
pub use workout::{ScheduledWorkout, WorkoutDraft, WorkoutStatus, WorkoutUpdate};
