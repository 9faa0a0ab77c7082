//! Round phases and outcomes.

use crate::player::PlayerSlot;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum RoundPhase {
    /// No game has been started yet.
    #[default]
    #[display("not started")]
    NotStarted,
    /// A round is being played.
    #[display("in progress")]
    InProgress,
    /// The last round ended in a win or a draw.
    #[display("round over")]
    RoundOver,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(PlayerSlot),
    /// The board filled up with no line.
    Draw,
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The round goes on; `next` is now to move.
    Continue {
        /// The player whose turn it is now.
        next: PlayerSlot,
    },
    /// The move ended the round.
    RoundOver(Outcome),
}
