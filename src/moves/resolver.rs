//! Slide resolution.
//!
//! `MoveResolver` simulates a slide on a borrowed board and describes the
//! outcome. It never mutates anything; committing is the board
//! controller's job.
//!
//! ## Rules
//!
//! Starting from the player's position, step one cell at a time:
//!
//! 1. Off the board or into a wall: halt on the last cell reached.
//! 2. Into another player: halt on the last cell reached. Players block
//!    each other like walls.
//! 3. Otherwise enter the cell.
//! 4. A stop cell halts the slide on that cell.
//! 5. A mine kills the player there.
//! 6. Gems and extra lives are collected and the slide continues.
//!
//! Halting where the slide started is an `Invalid` move.

use smallvec::SmallVec;
use tracing::trace;

use super::result::{AliveMove, MoveResult};
use crate::board::{Board, Entity};
use crate::core::{Direction, PlayerId, Position};

/// Pure slide simulation over a board.
#[derive(Clone, Copy, Debug)]
pub struct MoveResolver<'a> {
    board: &'a Board,
}

impl<'a> MoveResolver<'a> {
    /// Create a resolver over `board`.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Simulate `player` sliding from `position` in `direction`.
    #[must_use]
    pub fn resolve(&self, position: Position, direction: Direction, player: PlayerId) -> MoveResult {
        let mut gems = SmallVec::new();
        let mut extra_lives = SmallVec::new();
        let mut last_valid = position;

        while let Some(next) = self.step(last_valid, direction) {
            let cell = match self.board.cell(next) {
                Some(cell) => *cell,
                None => break,
            };

            if let Some(other) = cell.occupant() {
                if other != player {
                    trace!(%player, %other, at = %next, "slide blocked by player");
                    break;
                }
            }

            last_valid = next;

            if cell.is_stop() {
                break;
            }

            match cell.entity() {
                Some(Entity::Mine) => {
                    return MoveResult::Dead {
                        orig_position: position,
                        death_position: next,
                    };
                }
                Some(Entity::Gem) => gems.push(next),
                Some(Entity::ExtraLife) => extra_lives.push(next),
                Some(Entity::Player(_)) | None => {}
            }
        }

        if last_valid == position {
            return MoveResult::Invalid { position };
        }

        MoveResult::Alive(AliveMove {
            new_position: last_valid,
            orig_position: position,
            collected_gems: gems,
            collected_extra_lives: extra_lives,
        })
    }

    /// Next traversable cell in `direction`, or `None` at an edge or wall.
    fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = position.offset(direction, self.board.rows(), self.board.cols())?;
        self.board.cell(next)?.is_traversable().then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    const P0: PlayerId = PlayerId::new(0);

    fn resolve(layout: &str, direction: Direction) -> MoveResult {
        let board = BoardBuilder::parse(layout).unwrap();
        let start = board.player_position(P0).unwrap();
        MoveResolver::new(&board).resolve(start, direction, P0)
    }

    fn alive(result: MoveResult) -> AliveMove {
        match result {
            MoveResult::Alive(alive) => alive,
            other => panic!("expected alive move, got {:?}", other),
        }
    }

    #[test]
    fn test_slides_to_edge() {
        let mv = alive(resolve("0...", Direction::Right));
        assert_eq!(mv.new_position, Position::new(0, 3));
        assert_eq!(mv.orig_position, Position::new(0, 0));
        assert!(mv.collected_gems.is_empty());
    }

    #[test]
    fn test_halts_before_wall() {
        let mv = alive(resolve("0..W.", Direction::Right));
        assert_eq!(mv.new_position, Position::new(0, 2));
    }

    #[test]
    fn test_halts_on_stop_cell() {
        let mv = alive(resolve("0.S..", Direction::Right));
        assert_eq!(mv.new_position, Position::new(0, 2));
    }

    #[test]
    fn test_invalid_against_edge_and_wall() {
        assert_eq!(
            resolve("0...", Direction::Left),
            MoveResult::Invalid { position: Position::new(0, 0) }
        );
        assert_eq!(
            resolve("W0.", Direction::Left),
            MoveResult::Invalid { position: Position::new(0, 1) }
        );
    }

    #[test]
    fn test_collects_pickups_without_stopping() {
        let mv = alive(resolve("0G.LG.", Direction::Right));
        assert_eq!(mv.new_position, Position::new(0, 5));
        assert_eq!(mv.collected_gems.as_slice(), &[Position::new(0, 1), Position::new(0, 4)]);
        assert_eq!(mv.collected_extra_lives.as_slice(), &[Position::new(0, 3)]);
    }

    #[test]
    fn test_mine_is_fatal() {
        assert_eq!(
            resolve("0G.M.", Direction::Right),
            MoveResult::Dead {
                orig_position: Position::new(0, 0),
                death_position: Position::new(0, 3),
            }
        );
    }

    #[test]
    fn test_other_player_blocks() {
        let mv = alive(resolve("0.G1.", Direction::Right));
        assert_eq!(mv.new_position, Position::new(0, 2));
        assert_eq!(mv.collected_gems.as_slice(), &[Position::new(0, 2)]);

        assert_eq!(
            resolve("01..", Direction::Right),
            MoveResult::Invalid { position: Position::new(0, 0) }
        );
    }

    #[test]
    fn test_vertical_slide() {
        let mv = alive(resolve(
            "0
             G
             .
             S
             .",
            Direction::Down,
        ));
        assert_eq!(mv.new_position, Position::new(3, 0));
        assert_eq!(mv.collected_gems.as_slice(), &[Position::new(1, 0)]);
    }

    #[test]
    fn test_resolve_does_not_mutate() {
        let board = BoardBuilder::parse("0G.M").unwrap();
        let before = board.to_string();
        for direction in Direction::ALL {
            let _ = MoveResolver::new(&board).resolve(Position::new(0, 0), direction, P0);
        }
        assert_eq!(board.to_string(), before);
        assert_eq!(board.num_gems(), 1);
    }
}
