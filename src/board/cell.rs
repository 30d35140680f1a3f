//! Cells and the entities they hold.
//!
//! A cell is either a wall (never entered), a stop cell (entered, ends the
//! slide) or a floor cell (entered, slide continues). Stop and floor cells
//! may hold one entity.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something standing on a traversable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    /// A player. The board tracks where each player stands.
    Player(PlayerId),
    /// Collected when slid over; worth points.
    Gem,
    /// Collected when slid over; adds a life.
    ExtraLife,
    /// Kills a player that enters it.
    Mine,
}

impl Entity {
    /// The player id, if this entity is a player.
    #[must_use]
    pub const fn as_player(self) -> Option<PlayerId> {
        match self {
            Entity::Player(id) => Some(id),
            _ => None,
        }
    }

    /// ASCII layout character.
    #[must_use]
    pub fn to_ascii(self) -> char {
        match self {
            Entity::Player(id) => char::from_digit(u32::from(id.0), 10).unwrap_or('P'),
            Entity::Gem => 'G',
            Entity::ExtraLife => 'L',
            Entity::Mine => 'M',
        }
    }
}

/// One square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable. A slide halts before it.
    Wall,
    /// Halts a slide on entry.
    Stop(Option<Entity>),
    /// Plain traversable cell.
    Floor(Option<Entity>),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Floor(None)
    }
}

impl Cell {
    /// Whether a player can enter this cell at all.
    #[must_use]
    pub const fn is_traversable(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether entering this cell ends a slide.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Cell::Stop(_))
    }

    /// The entity on this cell, if any.
    #[must_use]
    pub const fn entity(&self) -> Option<Entity> {
        match self {
            Cell::Wall => None,
            Cell::Stop(entity) | Cell::Floor(entity) => *entity,
        }
    }

    /// The player standing on this cell, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<PlayerId> {
        self.entity().and_then(Entity::as_player)
    }

    /// Same cell kind holding `entity` instead. Walls stay walls.
    #[must_use]
    pub(crate) const fn with_entity(self, entity: Option<Entity>) -> Self {
        match self {
            Cell::Wall => Cell::Wall,
            Cell::Stop(_) => Cell::Stop(entity),
            Cell::Floor(_) => Cell::Floor(entity),
        }
    }

    /// ASCII layout character. Entities take precedence over the cell kind.
    #[must_use]
    pub fn to_ascii(&self) -> char {
        match self {
            Cell::Wall => 'W',
            Cell::Stop(None) => 'S',
            Cell::Floor(None) => '.',
            Cell::Stop(Some(entity)) | Cell::Floor(Some(entity)) => entity.to_ascii(),
        }
    }
}
