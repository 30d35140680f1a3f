//! Everything that mutates a game: the board controller, per-player
//! bookkeeping, the session and its thread-safe wrapper.

mod board_controller;
mod game;
mod session;
mod state;

pub use board_controller::BoardController;
pub use game::GameController;
pub use session::Session;
pub use state::PlayerGameState;
