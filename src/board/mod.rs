//! Board model: cells, entities and the shared grid.
//!
//! Storage and lookup only. Slides are computed by `moves::MoveResolver`
//! and applied by `controller::BoardController`.

mod builder;
mod cell;
mod grid;

pub use builder::BoardBuilder;
pub use cell::{Cell, Entity};
pub use grid::Board;
