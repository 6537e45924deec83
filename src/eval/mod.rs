//! Static evaluation of tic-tac-toe positions
//!
//! Scores are from the opponent's point of view: positive favours the
//! engine, negative favours the human. Only finished games score non-zero;
//! everything else is left to the search.

use crate::board::{Board, Player};
use crate::rules::winner_of;

/// Score of a won game before depth adjustment
pub const WIN_SCORE: i32 = 10;

/// Evaluate the board for the opponent.
///
/// Returns `WIN_SCORE` when the opponent has a line, `-WIN_SCORE` when the
/// human has one, and 0 for draws and unfinished games.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    match winner_of(board) {
        Some((Player::Opponent, _)) => WIN_SCORE,
        Some((Player::Human, _)) => -WIN_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> i32 {
        evaluate(&s.parse().unwrap())
    }

    #[test]
    fn test_opponent_win_is_positive() {
        assert_eq!(eval("OOO XX. X.."), WIN_SCORE);
    }

    #[test]
    fn test_human_win_is_negative() {
        assert_eq!(eval("XO. XO. X.."), -WIN_SCORE);
    }

    #[test]
    fn test_draw_and_in_progress_are_zero() {
        assert_eq!(eval("XOX OXX OXO"), 0);
        assert_eq!(eval("........."), 0);
        assert_eq!(eval("X...O...."), 0);
    }
}
