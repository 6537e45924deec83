//! Board representation for tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board side length (3x3)
pub const BOARD_SIZE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// A move is the row-major index (0-8) of an empty cell
pub type Move = usize;

/// Three cell indices forming a winning combination
pub type Line = [usize; 3];

/// The 8 winning lines in scan order: rows, columns, diagonals
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Plays X and always moves first
    Human,
    /// Plays O, driven by the engine
    Opponent,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Opponent => 'O',
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Opponent,
}

impl Mark {
    /// Owner of the mark, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Opponent => Some(Player::Opponent),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

impl From<Player> for Mark {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Mark::Human,
            Player::Opponent => Mark::Opponent,
        }
    }
}

/// Row and column of a cell index
#[inline]
pub fn row_col(idx: usize) -> (usize, usize) {
    (idx / BOARD_SIZE, idx % BOARD_SIZE)
}
