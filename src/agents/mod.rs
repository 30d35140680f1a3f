//! Automated players.
//!
//! - `MoveDelegate` / `MoveProcessor`: the seam between a move source and
//!   the session.
//! - `MovePolicy`: how a robot picks a direction (`RandomPolicy`,
//!   `SmartPolicy`).
//! - `IntervalGenerator`: how long a robot waits between moves.
//! - `Robot`: a background thread driving one player.

mod delegate;
mod interval;
mod policy;
mod robot;

pub use delegate::{MoveDelegate, MoveProcessor, SessionMover};
pub use interval::IntervalGenerator;
pub use policy::{policy_for, MovePolicy, RandomPolicy, SmartPolicy};
pub use robot::{DelegationStats, Robot};
