//! Wait times between robot moves.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, RobotConfig};

/// Gaussian wait-time distribution, in milliseconds.
///
/// Negative samples are clamped to zero, oversized ones to `Duration::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalGenerator {
    mean_ms: f64,
    std_ms: f64,
}

impl IntervalGenerator {
    #[must_use]
    pub const fn new(mean_ms: f64, std_ms: f64) -> Self {
        Self { mean_ms, std_ms }
    }

    /// Roughly one move per second.
    #[must_use]
    pub const fn every_second() -> Self {
        Self::new(1000.0, 1.0)
    }

    /// Roughly one move every 10 ms.
    #[must_use]
    pub const fn very_fast() -> Self {
        Self::new(10.0, 1.0)
    }

    /// Around `millis` ms per move.
    #[must_use]
    pub fn expected_millis(millis: u64) -> Self {
        Self::new(millis as f64, 1.0)
    }

    #[must_use]
    pub fn from_config(config: &RobotConfig) -> Self {
        Self::new(config.interval_mean_ms, config.interval_std_ms)
    }

    #[must_use]
    pub fn mean_ms(&self) -> f64 {
        self.mean_ms
    }

    #[must_use]
    pub fn std_ms(&self) -> f64 {
        self.std_ms
    }

    /// Sample the next wait.
    pub fn next(&self, rng: &mut GameRng) -> Duration {
        let millis = rng.gen_normal(self.mean_ms, self.std_ms);
        if millis.is_finite() && millis > 0.0 {
            Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for IntervalGenerator {
    fn default() -> Self {
        Self::every_second()
    }
}
