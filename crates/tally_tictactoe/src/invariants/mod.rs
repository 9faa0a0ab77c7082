//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and tested on their own.

pub mod alternating_turn;
pub mod history_consistent;
pub mod score_tally;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use score_tally::ScoreTallyInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    ScoreTallyInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, NullObserver};

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = GameSession::new(NullObserver);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_across_rounds() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        for index in [0, 3, 1, 4, 2] {
            session.play_move(index).unwrap();
        }
        assert!(SessionInvariants::check_all(&session).is_ok());

        session.next_round().unwrap();
        session.play_move(8).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new(NullObserver);
        type TwoInvariants = (AlternatingTurnInvariant, ScoreTallyInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
