//! Move outcomes, history and the slide resolver.

mod resolver;
mod result;
mod stack;

pub use resolver::MoveResolver;
pub use result::{AliveMove, MoveResult, Pickups};
pub use stack::MoveStack;
