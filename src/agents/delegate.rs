//! The contract between a move source and the session.

use crate::controller::Session;
use crate::core::{Direction, GameError, PlayerId};
use crate::moves::MoveResult;

/// Performs a chosen move on behalf of a player.
///
/// Called with the session lock held, so the move is committed against the
/// same board the direction was chosen on.
pub trait MoveProcessor: Send {
    fn process(
        &mut self,
        session: &mut Session,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveResult, GameError>;
}

impl<F> MoveProcessor for F
where
    F: FnMut(&mut Session, PlayerId, Direction) -> Result<MoveResult, GameError> + Send,
{
    fn process(
        &mut self,
        session: &mut Session,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveResult, GameError> {
        self(session, player, direction)
    }
}

/// Processor that plays the move through [`Session::process_move`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionMover;

impl MoveProcessor for SessionMover {
    fn process(
        &mut self,
        session: &mut Session,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveResult, GameError> {
        session.process_move(direction, player)
    }
}

/// Something that can play a player's moves in the background.
pub trait MoveDelegate {
    /// Start submitting moves through `processor`.
    ///
    /// A delegation already running is fully stopped first.
    fn start_delegation(&mut self, processor: Box<dyn MoveProcessor>);

    /// Stop submitting moves. Once this returns no further move is submitted.
    fn stop_delegation(&mut self);

    fn is_delegating(&self) -> bool;
}
