//! Cumulative score across the rounds of one game.

use crate::phases::Outcome;
use crate::player::PlayerSlot;
use serde::{Deserialize, Serialize};

/// Wins per player plus draws.
///
/// Survives `next_round`; only a new game resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    player_one: u32,
    player_two: u32,
    draws: u32,
}

impl Score {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by player one.
    pub fn player_one(&self) -> u32 {
        self.player_one
    }

    /// Rounds won by player two.
    pub fn player_two(&self) -> u32 {
        self.player_two
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by the player in `slot`.
    pub fn wins(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_two,
        }
    }

    /// Total rounds recorded.
    pub fn total(&self) -> u32 {
        self.player_one + self.player_two + self.draws
    }

    /// Records one finished round. Exactly one counter goes up by one.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(PlayerSlot::One) => self.player_one += 1,
            Outcome::Winner(PlayerSlot::Two) => self.player_two += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_exactly_one_counter() {
        let cases = [
            (Outcome::Winner(PlayerSlot::One), (1, 0, 0)),
            (Outcome::Winner(PlayerSlot::Two), (0, 1, 0)),
            (Outcome::Draw, (0, 0, 1)),
        ];
        for (outcome, expected) in cases {
            let mut score = Score::new();
            score.record(outcome);
            assert_eq!(
                (score.player_one(), score.player_two(), score.draws()),
                expected
            );
            assert_eq!(score.total(), 1);
        }
    }

    #[test]
    fn test_wins_by_slot() {
        let mut score = Score::new();
        score.record(Outcome::Winner(PlayerSlot::Two));
        score.record(Outcome::Winner(PlayerSlot::Two));
        assert_eq!(score.wins(PlayerSlot::Two), 2);
        assert_eq!(score.wins(PlayerSlot::One), 0);
    }
}
