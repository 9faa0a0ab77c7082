//! Contract-based validation for session moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use crate::error::MoveError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::phases::RoundPhase;
use crate::position::Position;
use crate::session::GameSession;
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S> {
    /// The action being guarded.
    type Action;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &Self::Action) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(state: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a round must be in progress.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Fails with [`MoveError::RoundNotInProgress`] outside `InProgress`.
    pub fn check<O>(session: &GameSession<O>) -> Result<(), MoveError> {
        match session.phase() {
            RoundPhase::InProgress => Ok(()),
            phase => Err(MoveError::RoundNotInProgress(phase)),
        }
    }
}

/// Precondition: the index names a board cell.
pub struct InBounds;

impl InBounds {
    /// Resolves the index or fails with [`MoveError::OutOfRange`].
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken cell.
    pub fn check<O>(session: &GameSession<O>, pos: Position) -> Result<(), MoveError> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `play_move`.
///
/// Preconditions, checked in this order:
/// - Round in progress
/// - Index in range
/// - Square empty
///
/// Postconditions: every session invariant holds.
pub struct MoveContract;

impl<O> Contract<GameSession<O>> for MoveContract {
    type Action = usize;

    #[instrument(skip(session))]
    fn pre(session: &GameSession<O>, index: &usize) -> Result<(), MoveError> {
        RoundInProgress::check(session)?;
        let pos = InBounds::check(*index)?;
        SquareIsEmpty::check(session, pos)
    }

    fn post(session: &GameSession<O>) -> Result<(), MoveError> {
        SessionInvariants::check_all(session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Checks every session invariant, panicking in debug builds on violation.
pub fn assert_invariants<O>(session: &GameSession<O>) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            error!(invariant = %violation.description, "Session invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullObserver;

    #[test]
    fn test_precondition_not_started() {
        let session = GameSession::new(NullObserver);
        assert_eq!(
            MoveContract::pre(&session, &0),
            Err(MoveError::RoundNotInProgress(RoundPhase::NotStarted))
        );
    }

    #[test]
    fn test_precondition_order() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        session.play_move(0).unwrap();

        assert!(MoveContract::pre(&session, &1).is_ok());
        assert_eq!(MoveContract::pre(&session, &9), Err(MoveError::OutOfRange(9)));
        assert_eq!(
            MoveContract::pre(&session, &0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_postcondition_holds_after_moves() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        for index in [4, 0, 8] {
            session.play_move(index).unwrap();
            assert!(MoveContract::post(&session).is_ok());
        }
    }
}
