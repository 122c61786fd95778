//! Nutrition calculation module
//!
//! Pure projections over the current snapshot of meals and plans.

pub mod aggregate;
pub mod progress;

pub use aggregate::{compute_day_totals, compute_meal_totals};
pub use progress::{
    compute_progress, compute_weekly_stats, DayProgress, MacroProgress, ProgressBand, WeeklyStats,
};
