//! What the terminal shows, as announced by the engine.

use tally_tictactoe::{Cell, PlayerSlot, Position, Score, SessionObserver, LINES};
use tracing::trace;

/// Display state fed only through [`SessionObserver`] calls.
///
/// The renderer reads board, score, status and highlight from here and
/// never from the session, so the screen shows exactly what the engine
/// announced.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    cells: [Cell; 9],
    player_one: String,
    player_two: String,
    score: Score,
    turn: Option<String>,
    result: Option<String>,
    next_round_available: bool,
}

impl Screen {
    /// Creates a blank screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board cells as last rendered.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Scoreboard entries: player 1, draws, player 2.
    pub fn scoreboard(&self) -> [String; 3] {
        [
            format!("{}: {}", self.player_one, self.score.wins(PlayerSlot::One)),
            format!("Draws: {}", self.score.draws()),
            format!("{}: {}", self.player_two, self.score.wins(PlayerSlot::Two)),
        ]
    }

    /// "It's {name}'s turn", once a game has started.
    pub fn turn_line(&self) -> Option<String> {
        self.turn.as_ref().map(|name| format!("It's {}'s turn", name))
    }

    /// Outcome message of the last round, if shown.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Whether the next-round prompt is visible.
    pub fn next_round_available(&self) -> bool {
        self.next_round_available
    }

    /// A turn has been announced and the round has not ended.
    pub fn accepts_moves(&self) -> bool {
        self.turn.is_some() && !self.next_round_available
    }

    /// The completed line on the rendered board, once the round is over.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if !self.next_round_available {
            return None;
        }
        LINES.iter().copied().find(|line| {
            let first = self.cells[line[0].to_index()];
            !first.is_empty() && line.iter().all(|pos| self.cells[pos.to_index()] == first)
        })
    }
}

impl SessionObserver for Screen {
    fn render_board(&mut self, cells: &[Cell; 9]) {
        trace!("render_board");
        self.cells = *cells;
    }

    fn render_scoreboard(&mut self, player_one: &str, player_two: &str) {
        trace!(player_one, player_two, "render_scoreboard");
        self.player_one = player_one.to_string();
        self.player_two = player_two.to_string();
        self.score = Score::new();
    }

    fn update_current_turn(&mut self, active_player: &str) {
        trace!(active_player, "update_current_turn");
        self.turn = Some(active_player.to_string());
    }

    fn update_scoreboard(&mut self, score: &Score, player_one: &str, player_two: &str) {
        trace!(?score, "update_scoreboard");
        self.score = *score;
        self.player_one = player_one.to_string();
        self.player_two = player_two.to_string();
    }

    fn display_result(&mut self, text: &str) {
        trace!(text, "display_result");
        self.result = Some(text.to_string());
    }

    fn clear_result(&mut self) {
        trace!("clear_result");
        self.result = None;
    }

    fn set_next_round_available(&mut self, available: bool) {
        trace!(available, "set_next_round_available");
        self.next_round_available = available;
    }
}
