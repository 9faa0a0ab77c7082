//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that completed it.
///
/// Lines are checked in [`LINES`] order and the search stops at the
/// first match. A reachable board never holds two different winners.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((line, mark))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [&str; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.iter().enumerate() {
            match *mark {
                "X" => board.place(index, Mark::X).map(|_| ()).unwrap(),
                "O" => board.place(index, Mark::O).map(|_| ()).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(["X", "X", "X", "", "", "", "", "", ""]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board).map(|(line, _)| line), Some(LINES[0]));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos.to_index(), Mark::O).unwrap();
            }
            assert_eq!(winning_line(&board), Some((line, Mark::O)));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(["", "", "O", "", "O", "", "O", "", ""]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(["X", "O", "X", "", "", "", "", "", ""]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(["X", "X", "", "", "", "", "", "", ""]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_the_search() {
        // Top row and left column both complete for X.
        let board = board_from(["X", "X", "X", "X", "O", "O", "X", "O", "O"]);
        assert_eq!(winning_line(&board), Some((LINES[0], Mark::X)));
    }
}
