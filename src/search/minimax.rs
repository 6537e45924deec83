//! Exhaustive minimax search with depth-biased scoring
//!
//! The tree is small enough (at most 9! move orders, far fewer after
//! terminal cutoffs) that every reachable position is visited; there is no
//! pruning and no transposition table. Each child gets its own copy of the
//! board, so sibling branches never observe each other's marks.
//!
//! Depth bias makes the opponent prefer quick wins and slow losses:
//! a win found `d` plies below the root scores `WIN_SCORE - d`, a loss
//! `-WIN_SCORE + d`.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "OO. XX. X..".parse().unwrap();
//! let mut searcher = Searcher::new();
//!
//! // Opponent completes the top row on the spot.
//! let after = board.with_move(2, Player::Opponent);
//! assert_eq!(searcher.search(&after, false, 0), 10);
//! assert!(searcher.nodes() > 0);
//! ```

use crate::board::{Board, Player};
use crate::eval::{evaluate, WIN_SCORE};

/// Minimax searcher that counts visited nodes.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited since creation or the last `reset`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Score `board` with `maximizing` telling whose turn it is
    /// (`true` = opponent). `depth` is the distance from the decision root.
    pub fn search(&mut self, board: &Board, maximizing: bool, depth: u32) -> i32 {
        self.nodes += 1;

        let score = evaluate(board);
        if score == WIN_SCORE {
            return WIN_SCORE - depth as i32;
        }
        if score == -WIN_SCORE {
            return -WIN_SCORE + depth as i32;
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing {
            Player::Opponent
        } else {
            Player::Human
        };

        let mut best: Option<i32> = None;
        for mv in board.empty_cells() {
            let child = board.with_move(mv, mover);
            let value = self.search(&child, !maximizing, depth + 1);
            best = Some(match best {
                None => value,
                Some(b) if maximizing => b.max(value),
                Some(b) => b.min(value),
            });
        }

        // Not full means a move existed; score any other shape as a draw.
        best.unwrap_or(0)
    }
}

/// Score a position without keeping statistics
#[must_use]
pub fn search(board: &Board, maximizing: bool, depth: u32) -> i32 {
    Searcher::new().search(board, maximizing, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_opponent_win_depth_bias() {
        let b = board("OOO XX. X..");
        assert_eq!(search(&b, false, 0), 10);
        assert_eq!(search(&b, false, 3), 7);
    }

    #[test]
    fn test_terminal_human_win_depth_bias() {
        let b = board("XXX OO. O..");
        assert_eq!(search(&b, true, 0), -10);
        assert_eq!(search(&b, true, 4), -6);
    }

    #[test]
    fn test_full_board_draw_scores_zero() {
        assert_eq!(search(&board("XOX OXX OXO"), true, 5), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(search(&Board::new(), false, 0), 0);
        assert_eq!(search(&Board::new(), true, 0), 0);
    }

    #[test]
    fn test_one_ply_win_beats_three_ply_win() {
        // O.O / XX. / ...: taking 1 wins now; the search from the root
        // reports the fastest forced win.
        let b = board("O.O XX. ...");
        let now = search(&b.with_move(1, Player::Opponent), false, 1);
        assert_eq!(now, 9);

        // A win that needs two more opponent plies scores lower.
        let slow = board("O.. ... ...");
        let later = search(&slow.with_move(4, Player::Opponent), false, 1);
        assert!(now > later);
        assert!(WIN_SCORE - 1 > WIN_SCORE - 3);
    }

    #[test]
    fn test_minimizer_blocks() {
        // Human to move must block 2; blocking also sets up their own win.
        let b = board("OO. ..X .X.");
        assert_eq!(search(&b, false, 0), -5);
        assert_eq!(search(&b.with_move(2, Player::Human), true, 1), -5);
        assert_eq!(search(&b.with_move(3, Player::Human), true, 1), 8);
    }

    #[test]
    fn test_search_is_deterministic() {
        let b = board("X.. .O. ..X");
        let first = search(&b, true, 0);
        for _ in 0..5 {
            assert_eq!(search(&b, true, 0), first);
        }
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let b = board("X.. .O. ...");
        let copy = b;
        let _ = search(&b, false, 0);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_node_count() {
        let mut searcher = Searcher::new();
        let b = board("XOX OXX OX.");
        // Root plus one child.
        searcher.search(&b, true, 0);
        assert_eq!(searcher.nodes(), 2);
        searcher.reset();
        assert_eq!(searcher.nodes(), 0);
    }
}
