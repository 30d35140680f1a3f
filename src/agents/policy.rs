//! Move selection for robots.
//!
//! A policy looks at the session (under the session lock) and picks at most
//! one direction for its player per tick:
//! - a surviving direction whenever one exists,
//! - otherwise a fatal one,
//! - otherwise nothing.

use crate::board::Board;
use crate::controller::{BoardController, Session};
use crate::core::{Direction, GameRng, PlayerId, RobotConfig, ScoreWeights, Strategy};
use crate::moves::MoveResult;

/// Picks the next direction for a robot-controlled player.
pub trait MovePolicy: Send {
    /// Choose a direction for `player`, or `None` if no move is legal.
    fn choose(&mut self, session: &Session, player: PlayerId, rng: &mut GameRng) -> Option<Direction>;
}

/// Build the policy described by `config`.
#[must_use]
pub fn policy_for(config: &RobotConfig) -> Box<dyn MovePolicy> {
    match config.strategy {
        Strategy::Random => Box::new(RandomPolicy),
        Strategy::Smart => Box::new(SmartPolicy::new(config.search_depth)),
    }
}

// =============================================================================
// Random Policy
// =============================================================================

/// Uniformly random among surviving directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, session: &Session, player: PlayerId, rng: &mut GameRng) -> Option<Direction> {
        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        let mut fatal = None;
        for direction in directions {
            match session.try_move(player, direction).ok()? {
                MoveResult::Alive(_) => return Some(direction),
                MoveResult::Dead { .. } | MoveResult::KickedOut { .. } => {
                    fatal.get_or_insert(direction);
                }
                MoveResult::Invalid { .. } => {}
            }
        }
        fatal
    }
}

// =============================================================================
// Smart Policy
// =============================================================================

/// Value of an extra life relative to one move.
const LIFE_VALUE: f64 = 3.0;

/// Weight of each further lookahead level.
const DISCOUNT: f64 = 0.9;

/// Depth-limited lookahead maximizing score gained.
///
/// Each candidate slide is committed on a clone of the board (cheap: cell
/// storage is persistent) and explored `depth` own moves deep. Other
/// players are assumed to stand still.
#[derive(Clone, Copy, Debug)]
pub struct SmartPolicy {
    depth: u32,
}

impl SmartPolicy {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self { depth: depth.max(1) }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Gain of one surviving move.
    fn gain(result: &MoveResult, weights: ScoreWeights) -> f64 {
        result.as_alive().map_or(0.0, |mv| {
            (weights.gem * mv.gems() as i64 - weights.r#move) as f64 + LIFE_VALUE * mv.extra_lives() as f64
        })
    }

    /// Best discounted gain reachable from `board` within `depth` moves.
    fn search(&self, board: &Board, player: PlayerId, weights: ScoreWeights, depth: u32) -> f64 {
        if depth == 0 || board.num_gems() == 0 {
            return 0.0;
        }

        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.evaluate(board, player, direction, weights, depth))
            .filter(|(result, _)| result.is_alive())
            .map(|(_, value)| value)
            .fold(None, |best: Option<f64>, value| Some(best.map_or(value, |b| b.max(value))))
            .unwrap_or(0.0)
    }

    /// Commit `direction` on a copy of `board` and score it.
    fn evaluate(
        &self,
        board: &Board,
        player: PlayerId,
        direction: Direction,
        weights: ScoreWeights,
        depth: u32,
    ) -> Option<(MoveResult, f64)> {
        let mut next = board.clone();
        let result = BoardController::new(&mut next).make_move(direction, player).ok()?;
        if !result.is_valid() {
            return None;
        }

        let mut value = Self::gain(&result, weights);
        if result.is_alive() {
            value += DISCOUNT * self.search(&next, player, weights, depth - 1);
        }
        Some((result, value))
    }
}

impl Default for SmartPolicy {
    fn default() -> Self {
        Self::new(RobotConfig::default().search_depth)
    }
}

impl MovePolicy for SmartPolicy {
    fn choose(&mut self, session: &Session, player: PlayerId, rng: &mut GameRng) -> Option<Direction> {
        let weights = session.game_state(player).ok()?.weights();
        let board = session.board();

        let mut alive: Vec<(Direction, f64)> = Vec::with_capacity(4);
        let mut fatal = Vec::new();
        for direction in Direction::ALL {
            match self.evaluate(board, player, direction, weights, self.depth) {
                Some((result, value)) if result.is_alive() => alive.push((direction, value)),
                Some(_) => fatal.push(direction),
                None => {}
            }
        }

        if alive.is_empty() {
            return rng.choose(&fatal).copied();
        }

        let best = alive.iter().map(|&(_, value)| value).fold(f64::NEG_INFINITY, f64::max);
        let ties: Vec<Direction> = alive
            .into_iter()
            .filter(|&(_, value)| best - value < 1e-9)
            .map(|(direction, _)| direction)
            .collect();
        rng.choose(&ties).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::core::SessionConfig;

    const P0: PlayerId = PlayerId::new(0);

    fn session(layout: &str) -> Session {
        Session::from_board(BoardBuilder::parse(layout).unwrap(), &SessionConfig::new()).unwrap()
    }

    #[test]
    fn test_random_prefers_survival() {
        // Up and left are blocked, right is a mine, down is safe.
        let session = session("0M\n..");
        let mut policy = RandomPolicy;
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            assert_eq!(policy.choose(&session, P0, &mut rng), Some(Direction::Down));
        }
    }

    #[test]
    fn test_random_falls_back_to_death() {
        let session = session("0M\nMG");
        let mut rng = GameRng::new(3);
        let choice = RandomPolicy.choose(&session, P0, &mut rng);
        assert!(matches!(choice, Some(Direction::Right | Direction::Down)));
    }

    #[test]
    fn test_random_with_no_legal_move() {
        let session = session("0W\nWG");
        let mut rng = GameRng::new(3);
        assert_eq!(RandomPolicy.choose(&session, P0, &mut rng), None);
    }

    #[test]
    fn test_smart_goes_for_gems() {
        let session = session(
            "...0...
             WWWSWWW
             ...G...",
        );
        let mut policy = SmartPolicy::new(2);
        let mut rng = GameRng::new(11);
        assert_eq!(policy.choose(&session, P0, &mut rng), Some(Direction::Down));
    }

    #[test]
    fn test_smart_avoids_death() {
        let session = session("M0G");
        let mut policy = SmartPolicy::new(3);
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            assert_eq!(policy.choose(&session, P0, &mut rng), Some(Direction::Right));
        }
    }

    #[test]
    fn test_smart_takes_death_only_when_forced() {
        let session = session("0M\nWG");
        let mut rng = GameRng::new(5);
        assert_eq!(SmartPolicy::new(2).choose(&session, P0, &mut rng), Some(Direction::Right));
    }

    #[test]
    fn test_policy_for_strategy() {
        let session = session("0.G");
        let mut rng = GameRng::new(0);
        for strategy in [Strategy::Random, Strategy::Smart] {
            let mut policy = policy_for(&RobotConfig::default().with_strategy(strategy));
            assert_eq!(policy.choose(&session, P0, &mut rng), Some(Direction::Right));
        }
    }

    #[test]
    fn test_unknown_player_gets_nothing() {
        let session = session("0.G");
        let mut rng = GameRng::new(0);
        assert_eq!(RandomPolicy.choose(&session, PlayerId::new(4), &mut rng), None);
        assert_eq!(SmartPolicy::default().choose(&session, PlayerId::new(4), &mut rng), None);
    }
}
