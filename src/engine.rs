//! Move selection for the automated opponent
//!
//! Two policies sit on top of the minimax searcher:
//!
//! 1. **Optimal** ([`best_move`]): score every empty cell with minimax and
//!    pick uniformly among all moves sharing the top score.
//! 2. **Mixed** ([`pick_move`]): flip a fair coin; heads plays a uniformly
//!    random empty cell, tails defers to [`best_move`].
//!
//! The mixed policy is what the game uses by default, so the opponent is
//! beatable. Randomness is always supplied by the caller, which keeps every
//! function here pure apart from the entropy it draws.
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use tictactoe::{best_move, Board};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let board: Board = "OO. XX. ...".parse().unwrap();
//!
//! // The winning cell is the only top-scoring move.
//! assert_eq!(best_move(&board, &mut rng), Some(2));
//! ```

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::{Board, Move, Player};
use crate::rules::game_result;
use crate::search::Searcher;

/// Chance that the mixed policy plays a random cell instead of searching
pub const RANDOM_MOVE_PROBABILITY: f64 = 0.5;

/// Which branch produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Uniformly random empty cell
    Random,
    /// Top-scoring minimax move
    Minimax,
    /// No move was possible
    None,
}

/// How the opponent chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpponentPolicy {
    /// Coin flip between a random move and the minimax move
    #[default]
    Mixed,
    /// Always the minimax move
    Optimal,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen cell, if any
    pub best_move: Option<Move>,
    /// Minimax score of the chosen cell (minimax branch only)
    pub score: Option<i32>,
    /// Branch that produced the move
    pub source: MoveSource,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall time spent deciding
    pub elapsed: Duration,
}

impl MoveResult {
    #[inline]
    fn no_move(elapsed: Duration) -> Self {
        Self {
            best_move: None,
            score: None,
            source: MoveSource::None,
            nodes: 0,
            elapsed,
        }
    }

    #[inline]
    fn random(mv: Move, elapsed: Duration) -> Self {
        Self {
            best_move: Some(mv),
            score: None,
            source: MoveSource::Random,
            nodes: 0,
            elapsed,
        }
    }
}

/// Minimax decision: every candidate's score plus the tie set.
struct Ranking {
    scores: Vec<(Move, i32)>,
    tied: Vec<Move>,
    best: Option<i32>,
    nodes: u64,
}

fn rank_moves(board: &Board) -> Ranking {
    let mut searcher = Searcher::new();
    let mut scores = Vec::new();
    let mut tied = Vec::new();
    let mut best: Option<i32> = None;

    for mv in board.empty_cells() {
        let child = board.with_move(mv, Player::Opponent);
        let value = searcher.search(&child, false, 0);
        scores.push((mv, value));

        match best {
            Some(b) if value < b => {}
            Some(b) if value == b => tied.push(mv),
            _ => {
                best = Some(value);
                tied.clear();
                tied.push(mv);
            }
        }
    }

    Ranking {
        scores,
        tied,
        best,
        nodes: searcher.nodes(),
    }
}

/// Minimax score of every empty cell for the opponent, in index order.
#[must_use]
pub fn score_moves(board: &Board) -> Vec<(Move, i32)> {
    rank_moves(board).scores
}

/// Best move for the opponent, ties broken uniformly at random.
///
/// Returns `None` only when the board has no empty cell.
pub fn best_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    best_move_with_stats(board, rng).best_move
}

fn best_move_with_stats<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> MoveResult {
    let start = Instant::now();
    let ranking = rank_moves(board);

    let Some(&mv) = ranking.tied.choose(rng) else {
        return MoveResult::no_move(start.elapsed());
    };

    trace!(scores = ?ranking.scores, "ranked opponent moves");
    debug!(
        mv,
        score = ?ranking.best,
        ties = ranking.tied.len(),
        nodes = ranking.nodes,
        "minimax move"
    );

    MoveResult {
        best_move: Some(mv),
        score: ranking.best,
        source: MoveSource::Minimax,
        nodes: ranking.nodes,
        elapsed: start.elapsed(),
    }
}

/// Opponent move under the mixed policy.
///
/// Returns `None` for finished games (won or full board). Otherwise one fair
/// coin is drawn: heads plays a uniformly random empty cell, tails plays
/// [`best_move`].
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    pick_move_with_stats(board, rng).best_move
}

fn pick_move_with_stats<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> MoveResult {
    let start = Instant::now();
    if game_result(board).is_over() {
        return MoveResult::no_move(start.elapsed());
    }

    let moves: Vec<Move> = board.empty_cells().collect();
    if rng.gen_bool(RANDOM_MOVE_PROBABILITY) {
        let Some(&mv) = moves.choose(rng) else {
            return MoveResult::no_move(start.elapsed());
        };
        debug!(mv, candidates = moves.len(), "random move");
        return MoveResult::random(mv, start.elapsed());
    }

    best_move_with_stats(board, rng)
}

/// Automated opponent: a policy plus the random source it draws from.
///
/// # Example
///
/// ```
/// use tictactoe::{Board, Opponent, OpponentPolicy};
///
/// let mut opponent = Opponent::seeded(42, OpponentPolicy::Optimal);
/// let board: Board = "X........".parse().unwrap();
///
/// // The centre is the only reply to a corner opening that does not lose.
/// assert_eq!(opponent.pick_move(&board), Some(4));
/// ```
pub struct Opponent<R: Rng = SmallRng> {
    rng: R,
    policy: OpponentPolicy,
}

impl Opponent<SmallRng> {
    /// Opponent seeded from OS entropy
    #[must_use]
    pub fn new(policy: OpponentPolicy) -> Self {
        Self::with_rng(SmallRng::from_entropy(), policy)
    }

    /// Opponent with a reproducible random source
    #[must_use]
    pub fn seeded(seed: u64, policy: OpponentPolicy) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), policy)
    }
}

impl<R: Rng> Opponent<R> {
    #[must_use]
    pub fn with_rng(rng: R, policy: OpponentPolicy) -> Self {
        Self { rng, policy }
    }

    #[inline]
    pub fn policy(&self) -> OpponentPolicy {
        self.policy
    }

    /// Choose a move, or `None` if the game is over.
    pub fn pick_move(&mut self, board: &Board) -> Option<Move> {
        self.pick_move_with_stats(board).best_move
    }

    /// Choose a move and report how it was found.
    pub fn pick_move_with_stats(&mut self, board: &Board) -> MoveResult {
        match self.policy {
            OpponentPolicy::Mixed => pick_move_with_stats(board, &mut self.rng),
            OpponentPolicy::Optimal => {
                if game_result(board).is_over() {
                    MoveResult::no_move(Duration::ZERO)
                } else {
                    best_move_with_stats(board, &mut self.rng)
                }
            }
        }
    }
}
