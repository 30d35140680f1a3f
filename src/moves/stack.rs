//! Undo history of surviving moves.

use serde::{Deserialize, Serialize};

use super::result::AliveMove;

/// LIFO history of a player's surviving moves.
///
/// `pop_count` only grows; scoring charges every undo even though the
/// move itself is reverted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStack {
    moves: Vec<AliveMove>,
    pop_count: u32,
}

impl MoveStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed move.
    pub fn push(&mut self, mv: AliveMove) {
        self.moves.push(mv);
    }

    /// Remove the most recent move, counting the pop.
    pub fn pop(&mut self) -> Option<AliveMove> {
        let mv = self.moves.pop()?;
        self.pop_count += 1;
        Some(mv)
    }

    /// Most recent move.
    #[must_use]
    pub fn peek(&self) -> Option<&AliveMove> {
        self.moves.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Number of successful pops so far.
    #[must_use]
    pub fn pop_count(&self) -> u32 {
        self.pop_count
    }
}
