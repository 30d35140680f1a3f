//! Background robot players.
//!
//! A `Robot` plays one player on its own thread. Each tick it waits a
//! sampled interval, takes the session lock, asks its policy for a
//! direction and hands it to the move processor under the same lock.
//!
//! ## Stopping
//!
//! The wait is a `recv_timeout` on a stop channel, so a stop request wakes
//! the worker immediately. `stop` then joins the thread: when it returns
//! the worker has exited and will submit nothing more.
//!
//! ```ignore
//! let controller = Arc::new(GameController::new(session));
//! let mut robot = Robot::new(Arc::clone(&controller), PlayerId::new(1), RobotConfig::default())?;
//! robot.start();
//! // ...
//! let stats = robot.stop();
//! ```

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use super::delegate::{MoveDelegate, MoveProcessor, SessionMover};
use super::interval::IntervalGenerator;
use super::policy::policy_for;
use crate::controller::GameController;
use crate::core::{GameError, GameRng, PlayerId, RobotConfig};

/// Counters from one delegation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelegationStats {
    /// Wake-ups that acquired the session.
    pub ticks: u64,
    /// Moves the processor accepted.
    pub moves_submitted: u64,
    /// Moves the processor rejected.
    pub moves_rejected: u64,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<DelegationStats>,
}

/// An automated player.
pub struct Robot {
    controller: Arc<GameController>,
    player: PlayerId,
    config: RobotConfig,
    rng: GameRng,
    worker: Option<Worker>,
    last_stats: Option<DelegationStats>,
}

impl Robot {
    /// Create a robot for `player`, which must be bound to the session.
    pub fn new(controller: Arc<GameController>, player: PlayerId, config: RobotConfig) -> Result<Self, GameError> {
        controller.game_state(player)?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            controller,
            player,
            config,
            rng,
            worker: None,
            last_stats: None,
        })
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Whether a worker thread is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|worker| !worker.handle.is_finished())
    }

    /// Stats of the most recently stopped delegation.
    #[must_use]
    pub fn last_stats(&self) -> Option<DelegationStats> {
        self.last_stats
    }

    /// Start playing moves through [`crate::controller::Session::process_move`].
    pub fn start(&mut self) {
        self.start_delegation(Box::new(SessionMover));
    }

    /// Stop the running delegation and wait for its thread.
    ///
    /// Returns `None` if nothing was running.
    pub fn stop(&mut self) -> Option<DelegationStats> {
        let worker = self.worker.take()?;
        let _ = worker.stop_tx.send(());
        let stats = worker.handle.join().unwrap_or_else(|_| {
            warn!(player = %self.player, "robot worker panicked");
            DelegationStats::default()
        });

        debug!(player = %self.player, ticks = stats.ticks, moves = stats.moves_submitted, "robot stopped");
        self.last_stats = Some(stats);
        Some(stats)
    }

    fn spawn(&mut self, mut processor: Box<dyn MoveProcessor>) -> Worker {
        let (stop_tx, stop_rx) = channel();
        let controller = Arc::clone(&self.controller);
        let player = self.player;
        let interval = IntervalGenerator::from_config(&self.config);
        let mut policy = policy_for(&self.config);
        let mut rng = self.rng.fork();

        let handle = thread::spawn(move || {
            let mut stats = DelegationStats::default();

            loop {
                match stop_rx.recv_timeout(interval.next(&mut rng)) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                let mut session = match controller.lock() {
                    Ok(session) => session,
                    Err(err) => {
                        warn!(%player, %err, "robot cannot reach session");
                        break;
                    }
                };
                stats.ticks += 1;

                if !session.board().has_player(player) || session.is_finished() {
                    trace!(%player, "robot has nothing left to play");
                    break;
                }

                let Some(direction) = policy.choose(&session, player, &mut rng) else {
                    trace!(%player, "robot has no legal move");
                    continue;
                };

                match processor.process(&mut session, player, direction) {
                    Ok(result) => {
                        stats.moves_submitted += 1;
                        trace!(%player, %direction, ?result, "robot moved");
                    }
                    Err(err) => {
                        stats.moves_rejected += 1;
                        warn!(%player, %direction, %err, "robot move rejected");
                    }
                }
            }

            stats
        });

        Worker { stop_tx, handle }
    }
}

impl MoveDelegate for Robot {
    fn start_delegation(&mut self, processor: Box<dyn MoveProcessor>) {
        self.stop();
        debug!(player = %self.player, strategy = ?self.config.strategy, "robot started");
        self.worker = Some(self.spawn(processor));
    }

    fn stop_delegation(&mut self) {
        self.stop();
    }

    fn is_delegating(&self) -> bool {
        self.is_running()
    }
}

impl Drop for Robot {
    fn drop(&mut self) {
        self.stop();
    }
}
