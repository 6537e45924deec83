//! Board structure with occupancy queries

use std::fmt;
use std::str::FromStr;

use super::{Mark, Move, Player, BOARD_CELLS, BOARD_SIZE};
use crate::error::BoardParseError;

/// Game board: 9 cells in row-major order.
///
/// `Copy` on purpose: the search hands out a fresh board per branch instead
/// of undoing moves on a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    /// Get the mark at a cell. Panics on an index past the board.
    #[inline]
    pub fn get(&self, idx: usize) -> Mark {
        self.cells[idx]
    }

    /// Check if a cell is empty (out-of-range indices are not)
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        matches!(self.cells.get(idx), Some(Mark::Empty))
    }

    /// Place a mark, overwriting whatever is there.
    /// Callers validate the move first.
    #[inline]
    pub fn place(&mut self, idx: Move, player: Player) {
        self.cells[idx] = player.into();
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        self.cells[idx] = Mark::Empty;
    }

    /// Copy of this board with one more mark
    #[inline]
    #[must_use]
    pub fn with_move(&self, idx: Move, player: Player) -> Self {
        let mut next = *self;
        next.place(idx, player);
        next
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(idx, _)| idx)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| *mark != Mark::Empty)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|mark| *mark == Mark::Empty)
    }

    /// Number of marks owned by a player
    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.cells.iter().filter(|m| **m == mark).count()
    }

    /// Marks placed so far
    #[inline]
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|m| **m != Mark::Empty).count()
    }

    /// Side to move by ply parity. Human opens, so even plies are theirs.
    #[inline]
    pub fn to_move(&self) -> Player {
        if self.ply() % 2 == 0 {
            Player::Human
        } else {
            Player::Opponent
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in cells {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the 9-character notation: `X`, `O` and `.` (or `_`/`-`) for an
/// empty cell. Whitespace and `/` row separators are skipped.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; BOARD_CELLS];
        let mut len = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let mark = match ch {
                'X' | 'x' => Mark::Human,
                'O' | 'o' => Mark::Opponent,
                '.' | '_' | '-' => Mark::Empty,
                other => return Err(BoardParseError::UnknownMark(other)),
            };
            if len < BOARD_CELLS {
                cells[len] = mark;
            }
            len += 1;
        }

        if len != BOARD_CELLS {
            return Err(BoardParseError::WrongLength(len));
        }
        Ok(Self { cells })
    }
}
