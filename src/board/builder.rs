//! Board construction.
//!
//! Boards come from a loader outside the engine. `BoardBuilder` is the seam
//! such a loader targets: place cells one at a time, or parse an ASCII
//! layout using the same alphabet `Board` renders with.
//!
//! | char | cell |
//! |------|------|
//! | `W` | wall |
//! | `S` | stop cell |
//! | `.` | empty floor |
//! | `G` | gem |
//! | `L` | extra life |
//! | `M` | mine |
//! | `0`-`9` | player with that id |
//!
//! ```
//! use inertia::board::BoardBuilder;
//! use inertia::core::{PlayerId, Position};
//!
//! let board = BoardBuilder::parse("0.G.S").unwrap();
//! assert_eq!(board.num_gems(), 1);
//! assert_eq!(board.player_position(PlayerId::new(0)), Some(Position::new(0, 0)));
//! ```

use rustc_hash::FxHashSet;

use super::cell::{Cell, Entity};
use super::grid::Board;
use crate::core::{GameError, PlayerId, Position};

/// Builder for a `Board`.
///
/// Players placed with `player` get sequential ids in call order.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    next_player: Option<u8>,
    error: Option<GameError>,
}

impl BoardBuilder {
    /// Start an all-floor board of the given size.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            next_player: Some(0),
            error: if rows == 0 || cols == 0 { Some(GameError::EmptyLayout) } else { None },
        }
    }

    /// Parse an ASCII layout. Surrounding whitespace and blank lines are ignored.
    pub fn parse(layout: &str) -> Result<Board, GameError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let expected = lines.first().map(|line| line.chars().count()).ok_or(GameError::EmptyLayout)?;

        let mut cells = Vec::with_capacity(lines.len() * expected);
        let mut seen = FxHashSet::default();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GameError::RaggedLayout { row, expected, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'W' => Cell::Wall,
                    'S' => Cell::Stop(None),
                    '.' => Cell::Floor(None),
                    'G' => Cell::Floor(Some(Entity::Gem)),
                    'L' => Cell::Floor(Some(Entity::ExtraLife)),
                    'M' => Cell::Floor(Some(Entity::Mine)),
                    '0'..='9' => {
                        let id = PlayerId::new(ch as u8 - b'0');
                        if !seen.insert(id) {
                            return Err(GameError::DuplicatePlayer(id));
                        }
                        Cell::Floor(Some(Entity::Player(id)))
                    }
                    _ => return Err(GameError::InvalidLayout { row, col, ch }),
                };
                cells.push(cell);
            }
        }

        Ok(Board::from_cells(lines.len(), expected, cells))
    }

    /// Make `(row, col)` a wall.
    #[must_use]
    pub fn wall(self, row: usize, col: usize) -> Self {
        self.set(row, col, Cell::Wall)
    }

    /// Make `(row, col)` an empty stop cell.
    #[must_use]
    pub fn stop(self, row: usize, col: usize) -> Self {
        self.set(row, col, Cell::Stop(None))
    }

    /// Put a gem on `(row, col)`.
    #[must_use]
    pub fn gem(self, row: usize, col: usize) -> Self {
        self.set(row, col, Cell::Floor(Some(Entity::Gem)))
    }

    /// Put an extra life on `(row, col)`.
    #[must_use]
    pub fn extra_life(self, row: usize, col: usize) -> Self {
        self.set(row, col, Cell::Floor(Some(Entity::ExtraLife)))
    }

    /// Put a mine on `(row, col)`.
    #[must_use]
    pub fn mine(self, row: usize, col: usize) -> Self {
        self.set(row, col, Cell::Floor(Some(Entity::Mine)))
    }

    /// Place the next player on `(row, col)`.
    ///
    /// Fails the build once all `u8` ids are taken.
    #[must_use]
    pub fn player(mut self, row: usize, col: usize) -> Self {
        let Some(next) = self.next_player else {
            self.error.get_or_insert(GameError::TooManyPlayers);
            return self;
        };
        self.next_player = next.checked_add(1);
        self.set(row, col, Cell::Floor(Some(Entity::Player(PlayerId::new(next)))))
    }

    /// Finish the board.
    pub fn build(self) -> Result<Board, GameError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Board::from_cells(self.rows, self.cols, self.cells)),
        }
    }

    fn set(mut self, row: usize, col: usize, cell: Cell) -> Self {
        if self.error.is_some() {
            return self;
        }
        if row >= self.rows || col >= self.cols {
            self.error = Some(GameError::OutOfBounds(Position::new(row, col)));
            return self;
        }
        self.cells[row * self.cols + col] = cell;
        self
    }
}
