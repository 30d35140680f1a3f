//! The shared game board.
//!
//! ## Ownership
//!
//! The board is the single owner of the position <-> entity relation. Each
//! player's location is kept in an index keyed by `PlayerId`, updated in the
//! same call that updates the cell, so the two never disagree.
//!
//! ## Cloning
//!
//! Cells live in an `im::Vector`, so cloning a board for lookahead is O(1)
//! and clones share structure until they are mutated.
//!
//! ## Mutation
//!
//! Only `BoardController` mutates a board; the mutators are crate-private.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Entity};
use crate::core::{PlayerId, Position};

/// Fixed-size grid of cells plus the count of gems still on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
    players: FxHashMap<PlayerId, Position>,
    /// Players placed when the board was built. Fixed for the board's lifetime.
    initial_players: usize,
    gems: usize,
}

impl Board {
    /// Assemble a board from row-major cells. Callers go through `BoardBuilder`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);

        let mut players = FxHashMap::default();
        let mut gems = 0;
        for (index, cell) in cells.iter().enumerate() {
            match cell.entity() {
                Some(Entity::Player(id)) => {
                    players.insert(id, Position::new(index / cols, index % cols));
                }
                Some(Entity::Gem) => gems += 1,
                _ => {}
            }
        }

        Self {
            rows,
            cols,
            initial_players: players.len(),
            cells: cells.into_iter().collect(),
            players,
            gems,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `rows * cols`, the base of every player's score.
    #[must_use]
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Cell at `position`, or `None` if it is off the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(self.index(position)?)
    }

    /// Entity at `position`, if any.
    #[must_use]
    pub fn entity(&self, position: Position) -> Option<Entity> {
        self.cell(position).and_then(Cell::entity)
    }

    /// Gems still on the board.
    #[must_use]
    pub fn num_gems(&self) -> usize {
        self.gems
    }

    /// Where `player` stands, or `None` if they are not on the board.
    #[must_use]
    pub fn player_position(&self, player: PlayerId) -> Option<Position> {
        self.players.get(&player).copied()
    }

    /// Whether `player` currently stands on the board.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains_key(&player)
    }

    /// Players currently on the board, in id order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.players.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of players the board was built with.
    #[must_use]
    pub fn initial_player_count(&self) -> usize {
        self.initial_players
    }

    /// Whether the board was built for more than one player.
    ///
    /// Stays true after players are kicked out.
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.initial_players > 1
    }

    /// Iterate over `(position, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    // === Mutation (crate-private) ===

    /// Remove whatever entity stands on `position`.
    ///
    /// Returns the removed entity. Walls and empty cells are left alone.
    pub(crate) fn clear(&mut self, position: Position) -> Option<Entity> {
        let index = self.index(position)?;
        let cell = *self.cells.get(index)?;
        let removed = cell.entity()?;

        self.cells.set(index, cell.with_entity(None));
        match removed {
            Entity::Gem => self.gems -= 1,
            Entity::Player(id) => {
                if self.players.get(&id) == Some(&position) {
                    self.players.remove(&id);
                }
            }
            Entity::ExtraLife | Entity::Mine => {}
        }
        Some(removed)
    }

    /// Put `entity` on `position`, replacing what was there.
    ///
    /// Placing a player moves them: their previous cell is emptied first.
    pub(crate) fn place(&mut self, position: Position, entity: Entity) {
        let Some(index) = self.index(position) else {
            return;
        };
        if let Entity::Player(id) = entity {
            if let Some(previous) = self.player_position(id) {
                self.clear(previous);
            }
        }
        self.clear(position);

        let Some(cell) = self.cells.get(index).copied() else {
            return;
        };
        if !cell.is_traversable() {
            return;
        }

        self.cells.set(index, cell.with_entity(Some(entity)));
        match entity {
            Entity::Gem => self.gems += 1,
            Entity::Player(id) => {
                self.players.insert(id, position);
            }
            Entity::ExtraLife | Entity::Mine => {}
        }
    }

    /// Flat index of `position`, or `None` off the board.
    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.cells[row * self.cols + col].to_ascii())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
