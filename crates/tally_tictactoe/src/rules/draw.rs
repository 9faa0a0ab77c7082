//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A draw is a full board with no winning line.
///
/// A full board that also completes a line is a win, never a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
