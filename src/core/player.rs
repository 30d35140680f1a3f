//! Player identification and life counts.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Identities are handed out when a board is
//! built (see `BoardBuilder`), never from process-wide state.
//!
//! ## Lives
//!
//! A player's remaining lives, either bounded or unlimited. Unlimited lives
//! never change and never run out.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Player identifier.
///
/// Player indices are 0-based: the first player placed on a board is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Remaining lives of a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lives {
    /// The player can never lose by running out of lives.
    #[default]
    Unlimited,
    /// A bounded number of lives. Zero means the player has lost.
    Limited(u32),
}

impl Lives {
    /// Whether this is the unlimited sentinel.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Lives::Unlimited)
    }

    /// Bounded count, or `None` for unlimited.
    #[must_use]
    pub const fn count(self) -> Option<u32> {
        match self {
            Lives::Unlimited => None,
            Lives::Limited(n) => Some(n),
        }
    }

    /// Whether the lives are exhausted. Always false for unlimited.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Lives::Limited(0))
    }

    /// Add `delta` lives. No-op for unlimited.
    #[must_use]
    pub fn increased(self, delta: u32) -> Self {
        match self {
            Lives::Unlimited => Lives::Unlimited,
            Lives::Limited(n) => Lives::Limited(n.saturating_add(delta)),
        }
    }

    /// Remove `delta` lives. No-op for unlimited.
    ///
    /// Going below zero is an invariant violation and is reported as
    /// `GameError::LifeUnderflow`.
    pub fn decreased(self, delta: u32) -> Result<Self, GameError> {
        match self {
            Lives::Unlimited => Ok(Lives::Unlimited),
            Lives::Limited(n) => n
                .checked_sub(delta)
                .map(Lives::Limited)
                .ok_or(GameError::LifeUnderflow { lives: n, delta }),
        }
    }
}

impl From<Option<u32>> for Lives {
    fn from(count: Option<u32>) -> Self {
        count.map_or(Lives::Unlimited, Lives::Limited)
    }
}

impl std::fmt::Display for Lives {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lives::Unlimited => f.write_str("unlimited"),
            Lives::Limited(n) => write!(f, "{}", n),
        }
    }
}
