//! Alternating turn invariant: player one, player two, player one, ...

use super::Invariant;
use crate::{GameSession, PlayerSlot, RoundPhase};

/// Invariant: players alternate within a round, player one first.
///
/// While the round is in progress, the player to move is the one the
/// history says is next.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn expected(moves_played: usize) -> PlayerSlot {
        if moves_played % 2 == 0 {
            PlayerSlot::One
        } else {
            PlayerSlot::Two
        }
    }
}

impl<O> Invariant<GameSession<O>> for AlternatingTurnInvariant {
    fn holds(session: &GameSession<O>) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == Self::expected(i));

        if !alternates {
            return false;
        }

        session.phase() != RoundPhase::InProgress
            || session.current_slot() == Self::expected(history.len())
    }

    fn description() -> &'static str {
        "Players alternate turns, player one first"
    }
}
