//! Tic-tac-toe engine with a minimax opponent
//!
//! A human (X, moves first) plays against an automated opponent (O). The
//! opponent scores every candidate move with an exhaustive minimax search
//! and, by default, plays that move only half the time: the other half it
//! picks a random empty cell.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: 3x3 board, marks, players and the line table
//! - [`rules`]: Terminal-state detection (win, draw)
//! - [`eval`]: Static evaluation of finished games
//! - [`search`]: Depth-biased minimax search
//! - [`engine`]: Move selection policies
//! - [`ui`]: Desktop front-end (history, input, rendering)
//!
//! The engine keeps no state between calls. Randomness is always passed in,
//! so a seeded generator makes every decision reproducible.
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use tictactoe::{pick_move, winner_of, Board, Player};
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut board = Board::new();
//! board.place(0, Player::Human);
//!
//! if let Some(mv) = pick_move(&board, &mut rng) {
//!     board.place(mv, Player::Opponent);
//! }
//! assert_eq!(board.ply(), 2);
//! assert_eq!(winner_of(&board), None);
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{row_col, Board, Line, Mark, Move, Player, BOARD_CELLS, BOARD_SIZE, LINES};
pub use engine::{
    best_move, pick_move, score_moves, MoveResult, MoveSource, Opponent, OpponentPolicy,
    RANDOM_MOVE_PROBABILITY,
};
pub use error::{BoardParseError, MoveError};
pub use eval::{evaluate, WIN_SCORE};
pub use rules::{game_result, is_draw, is_full, winner_of, GameResult};
pub use search::{search, Searcher};
