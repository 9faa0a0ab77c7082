//! Score tally invariant: one counter per finished round.

use super::Invariant;
use crate::{GameSession, RoundPhase};

/// Invariant: the score counts every finished round exactly once, and a
/// round outcome exists exactly while the session is in `RoundOver`.
pub struct ScoreTallyInvariant;

impl<O> Invariant<GameSession<O>> for ScoreTallyInvariant {
    fn holds(session: &GameSession<O>) -> bool {
        let tallied = session.score().total() == session.rounds_completed();
        let outcome_matches_phase =
            session.last_outcome().is_some() == (session.phase() == RoundPhase::RoundOver);
        tallied && outcome_matches_phase
    }

    fn description() -> &'static str {
        "Score total equals rounds completed"
    }
}
