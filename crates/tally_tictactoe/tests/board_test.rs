//! Tests for the board, positions and rules through the public API.

use tally_tictactoe::{
    check_winner, is_draw, is_full, Board, Cell, Mark, MoveError, PlayerSlot, Position,
};

fn board_from(symbols: [&str; 9]) -> Board {
    let mut board = Board::new();
    for (index, symbol) in symbols.iter().enumerate() {
        let mark = match *symbol {
            "X" => Mark::X,
            "O" => Mark::O,
            _ => continue,
        };
        board.place(index, mark).expect("empty cell");
    }
    board
}

#[test]
fn test_place_rejects_occupied_for_any_sequence() {
    let mut board = Board::new();
    let sequence = [4, 4, 0, 4, 0, 8, 8, 2];
    let mut slot = PlayerSlot::One;

    for index in sequence {
        let before = board.clone();
        match board.place(index, slot.mark()) {
            Ok(pos) => {
                assert!(before.is_empty(pos));
                slot = slot.opponent();
            }
            Err(MoveError::SquareOccupied(pos)) => {
                assert_eq!(board, before);
                assert!(!before.is_empty(pos));
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(board.filled(), 4);
}

#[test]
fn test_reset_then_cells_are_empty() {
    let mut board = board_from(["X", "O", "X", "", "O", "", "", "", "X"]);
    board.reset();
    assert_eq!(board.cells(), &[Cell::Empty; 9]);
}

#[test]
fn test_win_on_top_row() {
    let board = board_from(["X", "X", "X", "", "", "", "", "", ""]);
    assert_eq!(check_winner(&board), Some(Mark::X));
    assert!(!is_draw(&board));
}

#[test]
fn test_draw_board() {
    let board = board_from(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
    assert!(is_full(&board));
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = board_from(["X", "", "", "", "O", "", "", "", ""]);
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
