//! Win condition checking
//!
//! A player wins with three of their marks on one of the 8 fixed lines.
//! Lines are scanned in table order, so when an unreachable board satisfies
//! several lines at once the first one in `LINES` is reported.

use crate::board::{Board, Line, Mark, Player, LINES};

/// Find the winner and the line they completed
pub fn winner_of(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            mark.player().map(|player| (player, line))
        } else {
            None
        }
    })
}

/// Check if `player` has completed any line
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Mark::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == mark))
}
