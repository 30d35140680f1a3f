//! Thread-safe entry point to a session.
//!
//! `GameController` wraps a [`Session`] in one session-wide mutex. Every
//! public call takes the lock exactly once, so resolve, commit and
//! bookkeeping for one move never interleave with another mover.
//!
//! The lock is coarse on purpose. A slide is only correct against a
//! consistent snapshot of every player's position, so finer locking
//! would reopen the race it exists to close.

use std::sync::{Mutex, MutexGuard};

use super::session::Session;
use super::state::PlayerGameState;
use crate::board::Board;
use crate::core::{Direction, GameError, PlayerId};
use crate::moves::MoveResult;

/// A session shared between threads.
#[derive(Debug)]
pub struct GameController {
    session: Mutex<Session>,
}

impl GameController {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Acquire the session guard.
    ///
    /// Holding the guard lets a caller probe with `try_move` and commit with
    /// `process_move` atomically.
    pub fn lock(&self) -> Result<MutexGuard<'_, Session>, GameError> {
        self.session
            .lock()
            .map_err(|_| GameError::LockPoisoned("game session"))
    }

    /// See [`Session::process_move`].
    pub fn process_move(&self, direction: Direction, player: PlayerId) -> Result<MoveResult, GameError> {
        self.lock()?.process_move(direction, player)
    }

    /// See [`Session::process_undo`].
    pub fn process_undo(&self) -> Result<bool, GameError> {
        self.lock()?.process_undo()
    }

    /// See [`Session::winners`].
    pub fn winners(&self) -> Result<Option<Vec<PlayerId>>, GameError> {
        Ok(self.lock()?.winners())
    }

    pub fn is_finished(&self) -> Result<bool, GameError> {
        Ok(self.lock()?.is_finished())
    }

    /// Probe a slide without committing it.
    pub fn try_move(&self, player: PlayerId, direction: Direction) -> Result<MoveResult, GameError> {
        self.lock()?.try_move(player, direction)
    }

    /// Snapshot of one player's state.
    pub fn game_state(&self, player: PlayerId) -> Result<PlayerGameState, GameError> {
        self.lock()?.game_state(player).cloned()
    }

    /// Snapshot of the single player's state.
    pub fn single_game_state(&self) -> Result<PlayerGameState, GameError> {
        self.lock()?.single_game_state().cloned()
    }

    /// Snapshots of every player's state in id order.
    pub fn game_states(&self) -> Result<Vec<PlayerGameState>, GameError> {
        Ok(self.lock()?.game_states().into_iter().cloned().collect())
    }

    /// Snapshot of the board. Cheap: cell storage is shared.
    pub fn board(&self) -> Result<Board, GameError> {
        Ok(self.lock()?.board().clone())
    }

    pub fn score(&self, player: PlayerId) -> Result<i64, GameError> {
        self.lock()?.score(player)
    }

    pub fn players(&self) -> Result<Vec<PlayerId>, GameError> {
        Ok(self.lock()?.players())
    }
}
