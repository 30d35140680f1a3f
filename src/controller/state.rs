//! Per-player bookkeeping.
//!
//! A `PlayerGameState` tracks one player's lives, moves, deaths, gems and
//! undo history. It outlives the player's presence on the board: a kicked
//! out player keeps their counters for scoring.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameError, Lives, PlayerId, ScoreWeights};
use crate::moves::MoveStack;

/// Counters and history for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameState {
    player: PlayerId,
    lives: Lives,
    num_deaths: u32,
    /// Valid moves only; invalid attempts are not counted.
    num_moves: u32,
    num_got_gems: u32,
    move_stack: MoveStack,
    initial_gems: usize,
    weights: ScoreWeights,
}

impl PlayerGameState {
    /// Create the state for `player` with the given starting lives.
    #[must_use]
    pub fn new(player: PlayerId, lives: Lives) -> Self {
        Self {
            player,
            lives,
            num_deaths: 0,
            num_moves: 0,
            num_got_gems: 0,
            move_stack: MoveStack::new(),
            initial_gems: 0,
            weights: ScoreWeights::default(),
        }
    }

    /// Use custom score weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Record the board this state is being bound to.
    pub(crate) fn bind(&mut self, board: &Board) {
        self.initial_gems = board.num_gems();
    }

    // === Queries ===

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn lives(&self) -> Lives {
        self.lives
    }

    /// Bounded life count, `None` for unlimited.
    #[must_use]
    pub fn num_lives(&self) -> Option<u32> {
        self.lives.count()
    }

    #[must_use]
    pub fn has_unlimited_lives(&self) -> bool {
        self.lives.is_unlimited()
    }

    /// Whether the player ran out of lives. Never true for unlimited lives.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.lives.is_exhausted()
    }

    #[must_use]
    pub fn num_deaths(&self) -> u32 {
        self.num_deaths
    }

    #[must_use]
    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    #[must_use]
    pub fn num_got_gems(&self) -> u32 {
        self.num_got_gems
    }

    /// Number of undos performed.
    #[must_use]
    pub fn num_undos(&self) -> u32 {
        self.move_stack.pop_count()
    }

    #[must_use]
    pub fn move_stack(&self) -> &MoveStack {
        &self.move_stack
    }

    /// Gems on the board when this state was bound to it.
    #[must_use]
    pub fn initial_gems(&self) -> usize {
        self.initial_gems
    }

    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score against `board`, evaluated now.
    ///
    /// `area + gem * gems - move * moves - undo * undos - death * deaths`
    #[must_use]
    pub fn score(&self, board: &Board) -> i64 {
        let w = self.weights;
        board.area() as i64 + w.gem * i64::from(self.num_got_gems)
            - w.r#move * i64::from(self.num_moves)
            - w.undo * i64::from(self.num_undos())
            - w.death * i64::from(self.num_deaths)
    }

    // === Mutation (controller only) ===

    pub(crate) fn increase_lives(&mut self, delta: u32) -> Lives {
        self.lives = self.lives.increased(delta);
        self.lives
    }

    pub(crate) fn decrease_lives(&mut self, delta: u32) -> Result<Lives, GameError> {
        self.lives = self.lives.decreased(delta)?;
        Ok(self.lives)
    }

    pub(crate) fn increment_moves(&mut self) -> u32 {
        self.num_moves += 1;
        self.num_moves
    }

    pub(crate) fn increment_deaths(&mut self) -> u32 {
        self.num_deaths += 1;
        self.num_deaths
    }

    pub(crate) fn increase_got_gems(&mut self, delta: u32) -> u32 {
        self.num_got_gems += delta;
        self.num_got_gems
    }

    pub(crate) fn decrease_got_gems(&mut self, delta: u32) -> u32 {
        self.num_got_gems = self.num_got_gems.saturating_sub(delta);
        self.num_got_gems
    }

    pub(crate) fn move_stack_mut(&mut self) -> &mut MoveStack {
        &mut self.move_stack
    }
}
