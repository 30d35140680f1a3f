//! Core engine types: positions, players, lives, RNG, configuration, errors.
//!
//! Everything here is board-agnostic. The board, move and controller
//! modules build on these types.

pub mod position;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Direction, Position};
pub use player::{Lives, PlayerId};
pub use rng::GameRng;
pub use config::{RobotConfig, ScoreWeights, SessionConfig, Strategy};
pub use error::GameError;
