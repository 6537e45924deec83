//! Game rules for tic-tac-toe
//!
//! Terminal-state detection only: who won and along which line, whether the
//! board is full, and the combined result. Turn order and move legality are
//! left to the caller.

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::{game_result, is_draw, is_full, GameResult};
pub use win::{has_won, winner_of};
