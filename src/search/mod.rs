//! Search module for the tic-tac-toe opponent
//!
//! Contains the exhaustive minimax searcher used to score candidate moves.

pub mod minimax;

pub use minimax::{search, Searcher};
