//! The only writer of the board.
//!
//! `BoardController` borrows a board mutably and offers the three mutations
//! the game needs: commit a surviving slide, revert one, and remove a player.
//! Fatal and invalid slides leave the board untouched.

use tracing::{debug, trace};

use crate::board::{Board, Entity};
use crate::core::{Direction, GameError, PlayerId, Position};
use crate::moves::{AliveMove, MoveResolver, MoveResult};

/// Mutating facade over a borrowed `Board`.
pub struct BoardController<'a> {
    board: &'a mut Board,
}

impl<'a> BoardController<'a> {
    /// Take control of `board` for the duration of the borrow.
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// Read-only view of the controlled board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Simulate a slide without committing it.
    #[must_use]
    pub fn try_move(&self, position: Position, direction: Direction, player: PlayerId) -> MoveResult {
        MoveResolver::new(&*self.board).resolve(position, direction, player)
    }

    /// Slide `player` in `direction`, committing only if they survive.
    ///
    /// On `Alive` every collected pickup is cleared and the player is moved
    /// to the end of the slide. Any other outcome changes nothing.
    pub fn make_move(&mut self, direction: Direction, player: PlayerId) -> Result<MoveResult, GameError> {
        let position = self
            .board
            .player_position(player)
            .ok_or(GameError::PlayerNotOnBoard(player))?;

        let result = self.try_move(position, direction, player);
        if let MoveResult::Alive(mv) = &result {
            for &gem in &mv.collected_gems {
                self.board.clear(gem);
            }
            for &life in &mv.collected_extra_lives {
                self.board.clear(life);
            }
            self.board.place(mv.new_position, Entity::Player(player));
            debug!(
                %player,
                %direction,
                from = %mv.orig_position,
                to = %mv.new_position,
                gems = mv.gems(),
                extra_lives = mv.extra_lives(),
                "move committed"
            );
        } else {
            trace!(%player, %direction, ?result, "move not committed");
        }

        Ok(result)
    }

    /// Revert a committed surviving move.
    ///
    /// Only allowed on single-player boards. The player returns to the
    /// starting cell and fresh pickups are put back where they were
    /// collected. Reverting the same move twice is not guarded against.
    pub fn undo_move(&mut self, mv: &AliveMove, player: PlayerId) -> Result<(), GameError> {
        if self.board.is_multiplayer() {
            return Err(GameError::UndoInMultiplayer {
                players: self.board.initial_player_count(),
            });
        }
        let positions = std::iter::once(mv.orig_position)
            .chain(mv.collected_gems.iter().copied())
            .chain(mv.collected_extra_lives.iter().copied());
        for position in positions {
            if !self.board.contains(position) {
                return Err(GameError::OutOfBounds(position));
            }
        }

        self.board.place(mv.orig_position, Entity::Player(player));
        for &gem in &mv.collected_gems {
            self.board.place(gem, Entity::Gem);
        }
        for &life in &mv.collected_extra_lives {
            self.board.place(life, Entity::ExtraLife);
        }

        debug!(%player, from = %mv.new_position, to = %mv.orig_position, "move undone");
        Ok(())
    }

    /// Take `player` off the board.
    ///
    /// Returns false if they were already gone.
    pub fn kick_out(&mut self, player: PlayerId) -> bool {
        match self.board.player_position(player) {
            Some(position) => {
                self.board.clear(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::moves::Pickups;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_make_move_commits_alive() {
        let mut board = BoardBuilder::parse("0G.L.").unwrap();
        let result = BoardController::new(&mut board).make_move(Direction::Right, P0).unwrap();

        assert!(result.is_alive());
        assert_eq!(board.to_string(), "....0\n");
        assert_eq!(board.num_gems(), 0);
        assert_eq!(board.player_position(P0), Some(Position::new(0, 4)));
    }

    #[test]
    fn test_make_move_leaves_board_on_death() {
        let mut board = BoardBuilder::parse("0G.M.").unwrap();
        let result = BoardController::new(&mut board).make_move(Direction::Right, P0).unwrap();

        assert!(matches!(result, MoveResult::Dead { .. }));
        assert_eq!(board.to_string(), "0G.M.\n");
        assert_eq!(board.num_gems(), 1);
    }

    #[test]
    fn test_make_move_leaves_board_on_invalid() {
        let mut board = BoardBuilder::parse("0W").unwrap();
        let result = BoardController::new(&mut board).make_move(Direction::Right, P0).unwrap();

        assert_eq!(result, MoveResult::Invalid { position: Position::new(0, 0) });
        assert_eq!(board.to_string(), "0W\n");
    }

    #[test]
    fn test_make_move_for_missing_player() {
        let mut board = BoardBuilder::parse("0.").unwrap();
        let err = BoardController::new(&mut board).make_move(Direction::Right, P1).unwrap_err();
        assert_eq!(err, GameError::PlayerNotOnBoard(P1));
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = BoardBuilder::parse("0GL.S.").unwrap();
        let before = board.to_string();

        let mut controller = BoardController::new(&mut board);
        let result = controller.make_move(Direction::Right, P0).unwrap();
        let mv = result.as_alive().unwrap().clone();
        controller.undo_move(&mv, P0).unwrap();

        assert_eq!(board.to_string(), before);
        assert_eq!(board.num_gems(), 1);
        assert_eq!(board.player_position(P0), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_undo_rejected_on_multiplayer_board() {
        let mut board = BoardBuilder::parse("0..1").unwrap();
        let mut controller = BoardController::new(&mut board);
        let result = controller.make_move(Direction::Right, P0).unwrap();
        let mv = result.as_alive().unwrap().clone();

        let err = controller.undo_move(&mv, P0).unwrap_err();
        assert_eq!(err, GameError::UndoInMultiplayer { players: 2 });
        assert_eq!(board.player_position(P0), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_undo_rejects_off_board_positions() {
        let mut board = BoardBuilder::parse("0..\n..G").unwrap();
        let before = board.to_string();
        let mv = AliveMove {
            new_position: Position::new(0, 2),
            orig_position: Position::new(0, 3),
            collected_gems: Pickups::new(),
            collected_extra_lives: Pickups::new(),
        };

        let err = BoardController::new(&mut board).undo_move(&mv, P0).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds(Position::new(0, 3)));
        assert_eq!(board.to_string(), before);
        assert_eq!(board.player_position(P0), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_kick_out_is_idempotent() {
        let mut board = BoardBuilder::parse("0.1").unwrap();
        let mut controller = BoardController::new(&mut board);

        assert!(controller.kick_out(P1));
        assert!(!controller.kick_out(P1));
        assert_eq!(board.to_string(), "0..\n");
        assert_eq!(board.players(), vec![P0]);
    }
}
