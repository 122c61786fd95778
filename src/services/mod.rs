//! Session services
//!
//! Repository/service objects constructed once per session and injected
//! into consumers. Each owns its collection exclusively; mutations await a
//! simulated API latency.

mod exercises;
mod foods;
mod meals;
mod plans;
mod routines;
mod schedule;

pub use exercises::ExerciseService;
pub use foods::FoodService;
pub use meals::MealService;
pub use plans::PlanService;
pub use routines::RoutineService;
pub use schedule::{ScheduleService, WeekScheduleStats};
