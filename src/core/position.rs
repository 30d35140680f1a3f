//! Grid coordinates and movement directions.
//!
//! ## Position
//!
//! A `(row, col)` pair. Positions are only meaningful relative to a board's
//! dimensions; `offset` refuses to step outside them.
//!
//! ## Direction
//!
//! The four unit steps a player can slide in.
//!
//! ```
//! use inertia::core::{Direction, Position};
//!
//! let pos = Position::new(0, 0);
//! assert_eq!(pos.offset(Direction::Down, 3, 3), Some(Position::new(1, 0)));
//! assert_eq!(pos.offset(Direction::Up, 3, 3), None);
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board (0-based row and column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `direction`.
    ///
    /// Returns `None` if the step would leave a `rows` x `cols` board.
    #[must_use]
    pub fn offset(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row/column delta of a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
