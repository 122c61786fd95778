//! FitLife core library
//!
//! In-memory fitness and nutrition tracking: food catalog, meal logging,
//! nutrition plans, exercises, routines, and scheduled workouts.

pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod seed;
pub mod services;

pub use error::{Error, Result};
