//! Draw detection and the combined game result

use crate::board::{Board, Line, Player};

use super::win::winner_of;

/// Outcome of a board, recomputed on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Draw,
    Won { player: Player, line: Line },
}

impl GameResult {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won { player, .. } => Some(player),
            _ => None,
        }
    }
}

/// Check if no cell is empty
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner
pub fn is_draw(board: &Board) -> bool {
    winner_of(board).is_none() && is_full(board)
}

pub fn game_result(board: &Board) -> GameResult {
    if let Some((player, line)) = winner_of(board) {
        GameResult::Won { player, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
        assert_eq!(game_result(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let b = board("XOX OXX OXO");
        assert!(is_full(&b));
        assert!(is_draw(&b));
        assert_eq!(winner_of(&b), None);
        assert_eq!(game_result(&b), GameResult::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let b = board("XXX OOX OXO");
        assert!(is_full(&b));
        assert!(!is_draw(&b));
        assert_eq!(
            game_result(&b),
            GameResult::Won {
                player: Player::Human,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_result_helpers() {
        let won = game_result(&board("OOO XX. X.."));
        assert!(won.is_over());
        assert_eq!(won.winner(), Some(Player::Opponent));
        assert!(GameResult::Draw.is_over());
        assert_eq!(GameResult::Draw.winner(), None);
        assert!(!GameResult::InProgress.is_over());
    }
}
