//! # inertia
//!
//! A grid-sliding puzzle engine. Players slide across a board until
//! something stops them, collecting gems and extra lives on the way and
//! dying on mines. Several players, human or robot, can share one board.
//!
//! ## Design Principles
//!
//! 1. **Resolve, then commit**: `MoveResolver` simulates a slide without
//!    touching the board. Only `BoardController` mutates it, and only for
//!    surviving moves.
//!
//! 2. **One lock per session**: `GameController` serializes every mover
//!    through a single mutex, so each slide sees a consistent snapshot of
//!    all player positions.
//!
//! 3. **Cheap snapshots**: board cells live in `im` persistent storage, so
//!    cloning a board for a view or a lookahead is O(1).
//!
//! ## Modules
//!
//! - `core`: positions, directions, players, lives, RNG, configuration, errors
//! - `board`: cells, entities, the board grid and its builder
//! - `moves`: move outcomes, undo history, the slide resolver
//! - `controller`: board controller, player state, session, game controller
//! - `agents`: robot players, move policies, delegation
//!
//! ## Example
//!
//! ```
//! use inertia::{BoardBuilder, Direction, GameController, PlayerId, Session, SessionConfig};
//!
//! let board = BoardBuilder::parse("0.G.").unwrap();
//! let session = Session::from_board(board, &SessionConfig::new()).unwrap();
//! let game = GameController::new(session);
//!
//! let result = game.process_move(Direction::Right, PlayerId::new(0)).unwrap();
//! assert!(result.is_alive());
//! assert_eq!(game.winners().unwrap(), Some(vec![PlayerId::new(0)]));
//! ```

pub mod agents;
pub mod board;
pub mod controller;
pub mod core;
pub mod moves;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameError, GameRng, Lives, PlayerId, Position, RobotConfig, ScoreWeights,
    SessionConfig, Strategy,
};

pub use crate::board::{Board, BoardBuilder, Cell, Entity};

pub use crate::moves::{AliveMove, MoveResolver, MoveResult, MoveStack};

pub use crate::controller::{BoardController, GameController, PlayerGameState, Session};

pub use crate::agents::{
    DelegationStats, IntervalGenerator, MoveDelegate, MoveProcessor, MovePolicy, RandomPolicy,
    Robot, SessionMover, SmartPolicy,
};
