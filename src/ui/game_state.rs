//! Game state management for the tic-tac-toe GUI
//!
//! Owns everything the engine does not: the history of board snapshots,
//! the displayed step, human move validation, and the worker thread that
//! runs the opponent after its thinking delay.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::error::MoveError;
use crate::{
    game_result, Board, GameResult, Line, Move, MoveResult, Opponent, OpponentPolicy, Player,
    BOARD_CELLS,
};

/// Game settings chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the game's random source, OS entropy when `None`
    pub seed: Option<u64>,
    pub policy: OpponentPolicy,
    /// Pause before the opponent answers
    pub think_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            policy: OpponentPolicy::Mixed,
            think_delay: Duration::from_millis(420),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// What the status card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    YourTurn,
    OpponentTurn,
    /// A past step is on screen
    History,
    HumanWon,
    OpponentWon,
    Draw,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::YourTurn => "Your turn",
            Status::OpponentTurn => "Opponent's turn",
            Status::History => "History",
            Status::HumanWon => "You win!",
            Status::OpponentWon => "You lose",
            Status::Draw => "Draw",
        }
    }
}

/// Main game state
pub struct GameState {
    history: Vec<Board>,
    step: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    config: GameConfig,
    rng: SmallRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        Self {
            history: vec![Board::new()],
            step: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
            rng,
        }
    }

    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![Board::new()];
        self.step = 0;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        info!("new game");
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board at the displayed step
    #[inline]
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Every snapshot, starting with the empty board
    #[inline]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Check if the latest snapshot is on screen
    #[inline]
    pub fn is_current(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    pub fn result(&self) -> GameResult {
        game_result(self.board())
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.result() {
            GameResult::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.is_current() && !self.result().is_over() && self.board().to_move() == Player::Human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.is_current()
            && !self.result().is_over()
            && self.board().to_move() == Player::Opponent
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn status(&self) -> Status {
        match self.result() {
            GameResult::Won {
                player: Player::Human,
                ..
            } => Status::HumanWon,
            GameResult::Won {
                player: Player::Opponent,
                ..
            } => Status::OpponentWon,
            GameResult::Draw => Status::Draw,
            GameResult::InProgress if self.is_human_turn() => Status::YourTurn,
            GameResult::InProgress if self.is_ai_turn() => Status::OpponentTurn,
            GameResult::InProgress => Status::History,
        }
    }

    /// Attempt to place the human's mark
    #[instrument(skip(self))]
    pub fn try_human_move(&mut self, idx: Move) -> Result<(), MoveError> {
        if idx >= BOARD_CELLS {
            return Err(MoveError::OutOfRange(idx));
        }
        if !self.is_current() {
            return Err(MoveError::ViewingHistory);
        }
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() || self.board().to_move() != Player::Human {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board().is_empty(idx) {
            return Err(MoveError::CellOccupied(idx));
        }

        self.push_move(idx, Player::Human);
        Ok(())
    }

    /// Append the next snapshot and show it
    fn push_move(&mut self, idx: Move, player: Player) {
        let next = self.board().with_move(idx, player);
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;
        self.message = None;

        debug!(?player, idx, step = self.step, "move played");
        if let GameResult::Won { player, line } = self.result() {
            info!(?player, ?line, "game won");
        } else if self.result() == GameResult::Draw {
            info!("game drawn");
        }
    }

    /// Show a stored snapshot without changing it.
    ///
    /// Leaving the latest step drops any pending opponent decision; it is
    /// started again once the latest step is back on screen.
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() || step == self.step {
            return;
        }
        self.step = step;
        self.message = None;
        if !self.is_current() && self.is_ai_thinking() {
            debug!(step, "opponent decision dropped");
            self.ai_state = AiState::Idle;
        }
    }

    pub fn step_back(&mut self) {
        if let Some(step) = self.step.checked_sub(1) {
            self.jump_to(step);
        }
    }

    pub fn step_forward(&mut self) {
        self.jump_to(self.step + 1);
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.board();
        let seed: u64 = self.rng.gen();
        let policy = self.config.policy;
        let delay = self.config.think_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let mut opponent = Opponent::seeded(seed, policy);
            let result = opponent.pick_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("opponent worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("Opponent error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());

            match move_result.best_move {
                Some(idx) if self.is_ai_turn() && self.board().is_empty(idx) => {
                    self.push_move(idx, Player::Opponent);
                }
                Some(idx) => {
                    warn!(idx, "opponent move no longer applies");
                }
                None => {
                    self.message = Some("Opponent could not find a move".to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
