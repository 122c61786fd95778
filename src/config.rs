//! Simulation configuration
//!
//! There is no real backend; services sleep for a configurable latency
//! before applying mutations, standing in for API round-trips.

use std::time::Duration;

/// Default simulated latency per API round-trip
const DEFAULT_LATENCY_MS: u64 = 800;

/// Configuration for the simulated API layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Artificial delay applied before each mutating operation
    pub latency: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

impl SimConfig {
    /// Zero-latency configuration, for tests
    pub fn none() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Read latency from `FITLIFE_LATENCY_MS`, falling back to the default
    pub fn from_env() -> Self {
        let latency = std::env::var("FITLIFE_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_LATENCY_MS));
        Self { latency }
    }
}
