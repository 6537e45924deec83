use super::*;
use crate::error::BoardParseError;

#[test]
fn test_player_other() {
    assert_eq!(Player::Human.other(), Player::Opponent);
    assert_eq!(Player::Opponent.other(), Player::Human);
}

#[test]
fn test_mark_symbols() {
    assert_eq!(Mark::Human.symbol(), 'X');
    assert_eq!(Mark::Opponent.symbol(), 'O');
    assert_eq!(Mark::Empty.symbol(), '.');
    assert_eq!(Mark::from(Player::Opponent), Mark::Opponent);
    assert_eq!(Mark::Empty.player(), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(BOARD_CELLS, 9);
}

#[test]
fn test_line_table_order() {
    assert_eq!(LINES[0], [0, 1, 2]);
    assert_eq!(LINES[3], [0, 3, 6]);
    assert_eq!(LINES[6], [0, 4, 8]);
    assert_eq!(LINES[7], [2, 4, 6]);
}

#[test]
fn test_row_col() {
    assert_eq!(row_col(0), (0, 0));
    assert_eq!(row_col(4), (1, 1));
    assert_eq!(row_col(5), (1, 2));
    assert_eq!(row_col(8), (2, 2));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.ply(), 0);
    assert_eq!(board.to_move(), Player::Human);
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    board.place(4, Player::Human);
    assert_eq!(board.get(4), Mark::Human);
    assert!(!board.is_empty(4));
    assert_eq!(board.to_move(), Player::Opponent);

    board.remove(4);
    assert!(board.is_empty(4));
    assert!(board.is_board_empty());
}

#[test]
fn test_is_empty_out_of_range() {
    let board = Board::new();
    assert!(!board.is_empty(9));
    assert!(!board.is_empty(usize::MAX));
}

#[test]
fn test_with_move_leaves_original() {
    let board = Board::new();
    let next = board.with_move(0, Player::Human);
    assert!(board.is_board_empty());
    assert_eq!(next.get(0), Mark::Human);
    assert_eq!(next.count(Player::Human), 1);
}

#[test]
fn test_empty_cells_ascending() {
    let board: Board = "X.O/.X./O..".parse().unwrap();
    let empty: Vec<_> = board.empty_cells().collect();
    assert_eq!(empty, vec![1, 3, 5, 7, 8]);
}

#[test]
fn test_full_board() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
    assert_eq!(board.ply(), 9);
}

#[test]
fn test_display_round_trip() {
    let board: Board = "X.O.X...O".parse().unwrap();
    assert_eq!(board.to_string(), "X.O\n.X.\n..O");
    assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_errors() {
    assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
    assert_eq!(
        "XOXOXOXOXO".parse::<Board>(),
        Err(BoardParseError::WrongLength(10))
    );
    assert_eq!(
        "XOX.Z....".parse::<Board>(),
        Err(BoardParseError::UnknownMark('Z'))
    );
}
