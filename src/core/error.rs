//! Engine error type.
//!
//! Invalid moves are not errors: they come back as `MoveResult::Invalid`.
//! `GameError` covers misuse of the API (unknown players, undo in a
//! multiplayer session, malformed board layouts) and broken invariants.

use thiserror::Error;

use super::player::PlayerId;
use super::position::Position;

/// Errors surfaced by the board, controllers and agents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The player identity is not bound to this session.
    #[error("{0} is not part of this session")]
    UnknownPlayer(PlayerId),

    /// The player exists but has no entity on the board (kicked out).
    #[error("{0} is not on the board")]
    PlayerNotOnBoard(PlayerId),

    /// Undo was requested in a session with more than one player.
    #[error("undo is only available in single-player sessions ({players} players bound)")]
    UndoInMultiplayer { players: usize },

    /// A single-player query was made on a multiplayer session.
    #[error("session has {players} players, expected exactly one")]
    NotSinglePlayer { players: usize },

    /// A bounded life count would go negative.
    #[error("cannot remove {delta} lives from {lives}")]
    LifeUnderflow { lives: u32, delta: u32 },

    /// A session was built without any players.
    #[error("a session needs at least one player")]
    NoPlayers,

    /// The same player identity was bound twice.
    #[error("{0} is bound more than once")]
    DuplicatePlayer(PlayerId),

    /// Every player id is already in use.
    #[error("no player ids left")]
    TooManyPlayers,

    /// A position lies outside the board.
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    /// A layout character is not part of the board alphabet.
    #[error("unknown board character {ch:?} at row {row}, column {col}")]
    InvalidLayout { row: usize, col: usize, ch: char },

    /// Layout rows have different lengths.
    #[error("layout row {row} has {found} columns, expected {expected}")]
    RaggedLayout { row: usize, expected: usize, found: usize },

    /// The layout is empty.
    #[error("board layout is empty")]
    EmptyLayout,

    /// The session mutex was poisoned by a panicking mover.
    #[error("session lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
