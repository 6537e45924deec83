//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It only calls
//! the engine; history, turn handling and input live here.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{AiState, GameConfig, GameState, Status};
