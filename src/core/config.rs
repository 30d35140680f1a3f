//! Session and robot configuration.
//!
//! - `ScoreWeights`: How gems, moves, undos and deaths count toward a score
//! - `SessionConfig`: Starting lives and scoring for every player of a session
//! - `RobotConfig`: Strategy and timing of an automated player
//!
//! All configs are plain serde structs with builder-style `with_*` methods.

use serde::{Deserialize, Serialize};

use super::player::Lives;

/// Weights of the score formula.
///
/// `score = rows * cols + gem * gems - moves * move - undo * undos - death * deaths`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Points per collected gem.
    pub gem: i64,
    /// Penalty per valid move.
    pub r#move: i64,
    /// Penalty per undo.
    pub undo: i64,
    /// Penalty per death, on top of the move penalty.
    pub death: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            gem: 10,
            r#move: 1,
            undo: 2,
            death: 4,
        }
    }
}

/// Configuration applied to every player bound by `Session::from_board`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lives each player starts with.
    pub lives: Lives,

    /// Score formula weights.
    pub weights: ScoreWeights,
}

impl SessionConfig {
    /// Create a config with unlimited lives and default scoring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give every player `lives` bounded lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = Lives::Limited(lives);
        self
    }

    /// Give every player unlimited lives.
    #[must_use]
    pub fn with_unlimited_lives(mut self) -> Self {
        self.lives = Lives::Unlimited;
        self
    }

    /// Use custom score weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// How a robot picks its next direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Any surviving direction, chosen uniformly.
    #[default]
    Random,
    /// Depth-limited lookahead for gems.
    Smart,
}

/// Robot configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Move selection strategy.
    pub strategy: Strategy,

    /// Mean wait between move attempts, in milliseconds.
    pub interval_mean_ms: f64,

    /// Standard deviation of the wait, in milliseconds.
    pub interval_std_ms: f64,

    /// Seed for interval sampling and tie-breaking.
    pub seed: u64,

    /// Lookahead depth of the smart strategy (number of own moves).
    pub search_depth: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Random,
            interval_mean_ms: 1000.0,
            interval_std_ms: 1.0,
            seed: 42,
            search_depth: 3,
        }
    }
}

impl RobotConfig {
    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the mean interval (standard deviation stays 1 ms).
    #[must_use]
    pub fn with_interval_ms(mut self, mean_ms: f64) -> Self {
        self.interval_mean_ms = mean_ms;
        self
    }

    /// Set the interval standard deviation.
    #[must_use]
    pub fn with_interval_std_ms(mut self, std_ms: f64) -> Self {
        self.interval_std_ms = std_ms;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the smart search depth.
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }
}
