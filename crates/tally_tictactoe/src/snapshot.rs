//! Serializable view of a session.

use crate::phases::{Outcome, RoundPhase};
use crate::player::{PlayerSlot, Players};
use crate::score::Score;
use crate::types::{Board, Cell};
use serde::{Deserialize, Serialize};

/// Everything a reader needs to reconstruct the display of a session.
///
/// Built by [`GameSession::snapshot`](crate::GameSession::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: RoundPhase,
    /// Board cells in row-major order.
    pub cells: [Cell; 9],
    /// Both players' names and marks.
    pub players: Players,
    /// Seat whose turn it is.
    pub current: PlayerSlot,
    /// Cumulative score.
    pub score: Score,
    /// Rounds finished since the game started.
    pub rounds_completed: u32,
    /// Outcome of the round just finished, if any.
    pub last_outcome: Option<Outcome>,
}

impl SessionSnapshot {
    pub(crate) fn from_parts(
        phase: RoundPhase,
        board: &Board,
        players: &Players,
        current: PlayerSlot,
        score: Score,
        rounds_completed: u32,
        last_outcome: Option<Outcome>,
    ) -> Self {
        Self {
            phase,
            cells: *board.cells(),
            players: players.clone(),
            current,
            score,
            rounds_completed,
            last_outcome,
        }
    }

    /// Cells as display symbols (`"X"`, `"O"` or `""`).
    pub fn symbols(&self) -> [&'static str; 9] {
        self.cells.map(Cell::symbol)
    }
}
