//! Errors for rejected session operations.
//!
//! A rejected operation never mutates the session and never notifies
//! the observer. Callers that mirror the classic behavior simply drop
//! the error.

use crate::phases::RoundPhase;
use crate::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a board cell.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Moves are only accepted while a round is in progress.
    #[display("No round in progress ({})", _0)]
    RoundNotInProgress(RoundPhase),

    /// An invariant was violated (postcondition failure). Reported by
    /// [`MoveContract::post`](crate::MoveContract); `play_move` panics on it
    /// in debug builds rather than returning it.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error returned when advancing rounds at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// `next_round` needs a finished round.
    #[display("Current round is not over ({})", _0)]
    RoundNotOver(RoundPhase),
}

impl std::error::Error for RoundError {}
