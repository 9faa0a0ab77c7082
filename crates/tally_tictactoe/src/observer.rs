//! Notification boundary between the engine and whatever draws it.

use crate::score::Score;
use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// Receives every visible state change of a [`GameSession`](crate::GameSession).
///
/// Calls are fire-and-forget: the engine never reads anything back, and
/// the same call twice must leave the display in the same state.
pub trait SessionObserver {
    /// Full board snapshot for a redraw.
    fn render_board(&mut self, cells: &[Cell; 9]);

    /// A fresh game started: show both names with zeroed counters.
    fn render_scoreboard(&mut self, player_one: &str, player_two: &str);

    /// Announces whose turn it is.
    fn update_current_turn(&mut self, active_player: &str);

    /// Announces updated counters after a round ended.
    fn update_scoreboard(&mut self, score: &Score, player_one: &str, player_two: &str);

    /// Shows the outcome message of a finished round.
    fn display_result(&mut self, text: &str);

    /// Removes the outcome message.
    fn clear_result(&mut self);

    /// Shows or hides the way to start the next round.
    fn set_next_round_available(&mut self, available: bool);
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn render_board(&mut self, cells: &[Cell; 9]) {
        (**self).render_board(cells);
    }

    fn render_scoreboard(&mut self, player_one: &str, player_two: &str) {
        (**self).render_scoreboard(player_one, player_two);
    }

    fn update_current_turn(&mut self, active_player: &str) {
        (**self).update_current_turn(active_player);
    }

    fn update_scoreboard(&mut self, score: &Score, player_one: &str, player_two: &str) {
        (**self).update_scoreboard(score, player_one, player_two);
    }

    fn display_result(&mut self, text: &str) {
        (**self).display_result(text);
    }

    fn clear_result(&mut self) {
        (**self).clear_result();
    }

    fn set_next_round_available(&mut self, available: bool) {
        (**self).set_next_round_available(available);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn render_board(&mut self, _cells: &[Cell; 9]) {}
    fn render_scoreboard(&mut self, _player_one: &str, _player_two: &str) {}
    fn update_current_turn(&mut self, _active_player: &str) {}
    fn update_scoreboard(&mut self, _score: &Score, _player_one: &str, _player_two: &str) {}
    fn display_result(&mut self, _text: &str) {}
    fn clear_result(&mut self) {}
    fn set_next_round_available(&mut self, _available: bool) {}
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// `render_board`
    BoardRendered([Cell; 9]),
    /// `render_scoreboard`
    ScoreboardRendered {
        /// First player's name.
        player_one: String,
        /// Second player's name.
        player_two: String,
    },
    /// `update_current_turn`
    TurnChanged(String),
    /// `update_scoreboard`
    ScoreUpdated {
        /// Counters after the round.
        score: Score,
        /// First player's name.
        player_one: String,
        /// Second player's name.
        player_two: String,
    },
    /// `display_result`
    ResultShown(String),
    /// `clear_result`
    ResultCleared,
    /// `set_next_round_available`
    NextRoundAvailable(bool),
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SessionEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl SessionObserver for EventLog {
    fn render_board(&mut self, cells: &[Cell; 9]) {
        self.events.push(SessionEvent::BoardRendered(*cells));
    }

    fn render_scoreboard(&mut self, player_one: &str, player_two: &str) {
        self.events.push(SessionEvent::ScoreboardRendered {
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
        });
    }

    fn update_current_turn(&mut self, active_player: &str) {
        self.events
            .push(SessionEvent::TurnChanged(active_player.to_string()));
    }

    fn update_scoreboard(&mut self, score: &Score, player_one: &str, player_two: &str) {
        self.events.push(SessionEvent::ScoreUpdated {
            score: *score,
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
        });
    }

    fn display_result(&mut self, text: &str) {
        self.events.push(SessionEvent::ResultShown(text.to_string()));
    }

    fn clear_result(&mut self) {
        self.events.push(SessionEvent::ResultCleared);
    }

    fn set_next_round_available(&mut self, available: bool) {
        self.events.push(SessionEvent::NextRoundAvailable(available));
    }
}
