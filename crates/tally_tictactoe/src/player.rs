//! Player identities for a session.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which of the two seats a player occupies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum PlayerSlot {
    /// First player: marks `X`, opens every round.
    #[default]
    #[display("player 1")]
    One,
    /// Second player: marks `O`.
    #[display("player 2")]
    Two,
}

impl PlayerSlot {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Mark assigned to this seat.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }

    /// Seat that plays `mark`.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => PlayerSlot::One,
            Mark::O => PlayerSlot::Two,
        }
    }

    /// Name used when the player leaves theirs blank.
    pub fn default_name(self) -> &'static str {
        match self {
            PlayerSlot::One => "Player 1",
            PlayerSlot::Two => "Player 2",
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// A named player and their mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl Player {
    /// Creates the player for `slot`, falling back to the default name
    /// when `name` is empty or only whitespace. Other names are kept as
    /// typed.
    #[instrument]
    pub fn named_or_default(name: &str, slot: PlayerSlot) -> Self {
        let name = if name.trim().is_empty() {
            slot.default_name()
        } else {
            name
        };
        Self::new(name.to_string(), slot.mark())
    }
}

/// The two players of a session, indexed by [`PlayerSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players([Player; 2]);

impl Players {
    /// Creates both players from raw name input.
    pub fn from_names(player_one: &str, player_two: &str) -> Self {
        Self([
            Player::named_or_default(player_one, PlayerSlot::One),
            Player::named_or_default(player_two, PlayerSlot::Two),
        ])
    }

    /// Returns the player in `slot`.
    pub fn get(&self, slot: PlayerSlot) -> &Player {
        &self.0[slot.index()]
    }

    /// Display name of the player in `slot`.
    pub fn name(&self, slot: PlayerSlot) -> &str {
        self.get(slot).name()
    }
}
