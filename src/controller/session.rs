//! One game session: a shared board plus the players bound to it.
//!
//! `Session` turns raw slide outcomes into bookkeeping: move counts, gems,
//! life gain and loss, elimination, undo and winner computation. It is a
//! plain single-threaded value; `GameController` puts it behind the
//! session-wide lock.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::board_controller::BoardController;
use super::state::PlayerGameState;
use crate::board::Board;
use crate::core::{Direction, GameError, PlayerId, Position, SessionConfig};
use crate::moves::{MoveResolver, MoveResult};

/// A board and the players playing on it.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    states: FxHashMap<PlayerId, PlayerGameState>,
}

impl Session {
    /// Bind `states` to `board`.
    ///
    /// Every state must belong to a distinct player standing on the board.
    pub fn new(board: Board, states: Vec<PlayerGameState>) -> Result<Self, GameError> {
        if states.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut bound = FxHashMap::default();
        for mut state in states {
            let player = state.player();
            if !board.has_player(player) {
                return Err(GameError::PlayerNotOnBoard(player));
            }
            state.bind(&board);
            if bound.insert(player, state).is_some() {
                return Err(GameError::DuplicatePlayer(player));
            }
        }

        debug!(players = bound.len(), gems = board.num_gems(), "session created");
        Ok(Self { board, states: bound })
    }

    /// Bind every player on `board` using `config`.
    pub fn from_board(board: Board, config: &SessionConfig) -> Result<Self, GameError> {
        let states = board
            .players()
            .into_iter()
            .map(|player| PlayerGameState::new(player, config.lives).with_weights(config.weights))
            .collect();
        Self::new(board, states)
    }

    // === Queries ===

    /// The shared board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of bound players, eliminated ones included.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.states.len()
    }

    /// Bound players in id order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.states.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// State of `player`.
    pub fn game_state(&self, player: PlayerId) -> Result<&PlayerGameState, GameError> {
        self.states.get(&player).ok_or(GameError::UnknownPlayer(player))
    }

    /// All player states in id order.
    #[must_use]
    pub fn game_states(&self) -> Vec<&PlayerGameState> {
        let mut states: Vec<_> = self.states.values().collect();
        states.sort_unstable_by_key(|state| state.player());
        states
    }

    /// The only player's state. Fails for multiplayer sessions.
    pub fn single_game_state(&self) -> Result<&PlayerGameState, GameError> {
        self.single_player().map(|(_, state)| state)
    }

    /// Current score of `player`.
    pub fn score(&self, player: PlayerId) -> Result<i64, GameError> {
        Ok(self.game_state(player)?.score(&self.board))
    }

    /// Simulate a slide for `player` without committing it.
    pub fn try_move(&self, player: PlayerId, direction: Direction) -> Result<MoveResult, GameError> {
        let position = self.position_of(player)?;
        Ok(MoveResolver::new(&self.board).resolve(position, direction, player))
    }

    /// Whether the game is over: no gems left, or every player has lost.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.num_gems() == 0 || self.states.values().all(PlayerGameState::has_lost)
    }

    /// Winners of a finished game.
    ///
    /// - `None` while the game is still going.
    /// - `Some(vec![])` when every player has lost.
    /// - Otherwise the surviving players sharing the highest score, in id order.
    #[must_use]
    pub fn winners(&self) -> Option<Vec<PlayerId>> {
        if !self.is_finished() {
            return None;
        }

        let survivors: Vec<_> = self
            .game_states()
            .into_iter()
            .filter(|state| !state.has_lost())
            .map(|state| (state.player(), state.score(&self.board)))
            .collect();

        let Some(best) = survivors.iter().map(|&(_, score)| score).max() else {
            return Some(Vec::new());
        };

        Some(
            survivors
                .into_iter()
                .filter(|&(_, score)| score == best)
                .map(|(player, _)| player)
                .collect(),
        )
    }

    // === Moves ===

    /// Slide `player` in `direction` and update their bookkeeping.
    ///
    /// - `Invalid`: nothing changes.
    /// - `Alive`: move counted, gems and extra lives credited, move pushed for undo.
    /// - `Dead`: move and death counted, one life lost. If that was the last
    ///   life the player is kicked out and `KickedOut` is returned instead.
    pub fn process_move(&mut self, direction: Direction, player: PlayerId) -> Result<MoveResult, GameError> {
        let Some(state) = self.states.get_mut(&player) else {
            warn!(%player, "move rejected for unbound player");
            return Err(GameError::UnknownPlayer(player));
        };
        let mut controller = BoardController::new(&mut self.board);
        let result = controller.make_move(direction, player)?;

        if !result.is_valid() {
            return Ok(result);
        }

        match &result {
            MoveResult::Alive(mv) => {
                state.increment_moves();
                state.increase_got_gems(mv.gems() as u32);
                state.increase_lives(mv.extra_lives() as u32);
                state.move_stack_mut().push(mv.clone());
            }
            MoveResult::Dead { orig_position, death_position } => {
                state.increment_moves();
                state.increment_deaths();
                let lives = state.decrease_lives(1)?;
                debug!(%player, at = %death_position, %lives, "player died");

                if lives.is_exhausted() {
                    controller.kick_out(player);
                    info!(%player, deaths = state.num_deaths(), "player kicked out");
                    let orig_position = *orig_position;
                    self.log_if_finished();
                    return Ok(MoveResult::KickedOut { orig_position });
                }
            }
            MoveResult::Invalid { .. } | MoveResult::KickedOut { .. } => {}
        }

        self.log_if_finished();
        Ok(result)
    }

    /// Revert the single player's most recent surviving move.
    ///
    /// Board contents, lives and collected gems go back to what they were
    /// before the move. Move and undo counters only ever grow.
    ///
    /// Returns `Ok(false)` if there is nothing to undo. Multiplayer sessions
    /// are rejected. Reverting extra lives may leave a bounded player at zero.
    pub fn process_undo(&mut self) -> Result<bool, GameError> {
        if self.states.len() != 1 || self.board.is_multiplayer() {
            let players = self.states.len().max(self.board.initial_player_count());
            warn!(players, "undo rejected in multiplayer session");
            return Err(GameError::UndoInMultiplayer { players });
        }

        let (player, state) = self
            .states
            .iter_mut()
            .next()
            .map(|(&player, state)| (player, state))
            .ok_or(GameError::NoPlayers)?;
        if !self.board.has_player(player) {
            return Err(GameError::PlayerNotOnBoard(player));
        }

        let Some(extra_lives) = state.move_stack().peek().map(|mv| mv.extra_lives() as u32) else {
            return Ok(false);
        };
        // Underflow must surface before the stack is touched.
        state.lives().decreased(extra_lives)?;

        let Some(mv) = state.move_stack_mut().pop() else {
            return Ok(false);
        };
        state.decrease_lives(extra_lives)?;
        state.decrease_got_gems(mv.gems() as u32);
        BoardController::new(&mut self.board).undo_move(&mv, player)?;
        Ok(true)
    }

    fn single_player(&self) -> Result<(PlayerId, &PlayerGameState), GameError> {
        if self.states.len() != 1 {
            return Err(GameError::NotSinglePlayer { players: self.states.len() });
        }
        self.states
            .iter()
            .next()
            .map(|(&player, state)| (player, state))
            .ok_or(GameError::NoPlayers)
    }

    fn position_of(&self, player: PlayerId) -> Result<Position, GameError> {
        if !self.states.contains_key(&player) {
            return Err(GameError::UnknownPlayer(player));
        }
        self.board
            .player_position(player)
            .ok_or(GameError::PlayerNotOnBoard(player))
    }

    fn log_if_finished(&self) {
        if let Some(winners) = self.winners() {
            info!(?winners, gems_left = self.board.num_gems(), "game finished");
        }
    }
}
