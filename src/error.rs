//! Error types for move validation and board parsing
//!
//! The engine itself has no failure modes: every call on a well-formed board
//! returns a value. These errors belong to the boundary around it, where a
//! human move is checked before it reaches the board and where boards are
//! read from text.

use crate::board::BOARD_CELLS;

/// Reasons a human move is rejected before it reaches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell {} is outside the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already taken", _0)]
    CellOccupied(usize),

    /// The game already ended in a win or a draw.
    #[display("Game is over")]
    GameOver,

    /// The opponent is to move.
    #[display("Not your turn")]
    NotYourTurn,

    /// A past step is displayed; moves are only accepted on the latest one.
    #[display("Viewing history, return to the latest move to play")]
    ViewingHistory,
}

impl std::error::Error for MoveError {}

/// Failure to read a board from its 9-character text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    #[display("Expected {} cells, found {}", BOARD_CELLS, _0)]
    WrongLength(usize),

    #[display("Unknown cell character {:?}", _0)]
    UnknownMark(char),
}

impl std::error::Error for BoardParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::CellOccupied(4).to_string(), "Cell 4 is already taken");
        assert_eq!(MoveError::OutOfRange(12).to_string(), "Cell 12 is outside the board");
        assert_eq!(MoveError::GameOver.to_string(), "Game is over");
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(BoardParseError::WrongLength(7).to_string(), "Expected 9 cells, found 7");
        assert_eq!(BoardParseError::UnknownMark('z').to_string(), "Unknown cell character 'z'");
    }
}
