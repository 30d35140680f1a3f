//! Outcome of a single slide.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Position;

/// Positions of pickups collected during one slide.
///
/// Most slides pass over a handful of pickups, so these stay inline.
pub type Pickups = SmallVec<[Position; 4]>;

/// A slide the player survived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliveMove {
    /// Where the slide ended.
    pub new_position: Position,
    /// Where the slide started.
    pub orig_position: Position,
    /// Gems passed over, in slide order.
    pub collected_gems: Pickups,
    /// Extra lives passed over, in slide order.
    pub collected_extra_lives: Pickups,
}

impl AliveMove {
    /// Number of gems this slide collected.
    #[must_use]
    pub fn gems(&self) -> usize {
        self.collected_gems.len()
    }

    /// Number of extra lives this slide collected.
    #[must_use]
    pub fn extra_lives(&self) -> usize {
        self.collected_extra_lives.len()
    }
}

/// What happened when a player tried to slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The player could not move at all.
    Invalid { position: Position },
    /// The player moved and survived.
    Alive(AliveMove),
    /// The player slid onto a mine.
    Dead {
        orig_position: Position,
        death_position: Position,
    },
    /// The player died and had no lives left; they are off the board.
    KickedOut { orig_position: Position },
}

impl MoveResult {
    /// Anything other than `Invalid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveResult::Invalid { .. })
    }

    /// Whether the player survived a valid move.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        matches!(self, MoveResult::Alive(_))
    }

    /// Whether the player died (kicked out or not).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveResult::Dead { .. } | MoveResult::KickedOut { .. })
    }

    /// The surviving move, if any.
    #[must_use]
    pub fn as_alive(&self) -> Option<&AliveMove> {
        match self {
            MoveResult::Alive(alive) => Some(alive),
            _ => None,
        }
    }

    /// Where the player stood before the attempt.
    #[must_use]
    pub fn orig_position(&self) -> Position {
        match self {
            MoveResult::Invalid { position } => *position,
            MoveResult::Alive(alive) => alive.orig_position,
            MoveResult::Dead { orig_position, .. } | MoveResult::KickedOut { orig_position } => *orig_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn alive() -> MoveResult {
        MoveResult::Alive(AliveMove {
            new_position: Position::new(0, 3),
            orig_position: Position::new(0, 0),
            collected_gems: smallvec![Position::new(0, 1)],
            collected_extra_lives: smallvec![],
        })
    }

    #[test]
    fn test_classification() {
        let invalid = MoveResult::Invalid { position: Position::new(1, 1) };
        assert!(!invalid.is_valid());
        assert!(!invalid.is_fatal());

        assert!(alive().is_valid());
        assert!(alive().is_alive());

        let dead = MoveResult::Dead {
            orig_position: Position::new(0, 0),
            death_position: Position::new(0, 2),
        };
        assert!(dead.is_valid());
        assert!(dead.is_fatal());

        let out = MoveResult::KickedOut { orig_position: Position::new(0, 0) };
        assert!(out.is_fatal());
        assert!(!out.is_alive());
    }

    #[test]
    fn test_orig_position() {
        assert_eq!(alive().orig_position(), Position::new(0, 0));
        assert_eq!(
            MoveResult::Invalid { position: Position::new(2, 2) }.orig_position(),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_alive_counts() {
        let result = alive();
        let alive = result.as_alive().unwrap();
        assert_eq!(alive.gems(), 1);
        assert_eq!(alive.extra_lives(), 0);
    }

    #[test]
    fn test_serialization() {
        let result = alive();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: MoveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
