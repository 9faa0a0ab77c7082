//! Application state and key handling.

use crate::input::{game_command, move_cursor, Command};
use crate::screen::Screen;
use crossterm::event::KeyCode;
use tally_tictactoe::{GameSession, PlayerSlot, Position, RoundPhase};
use tracing::{debug, info, instrument};

/// Which name field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Player 1 (X).
    One,
    /// Player 2 (O).
    Two,
}

/// The two free-text inputs shown before a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    /// Text typed for player 1.
    pub player_one: String,
    /// Text typed for player 2.
    pub player_two: String,
    /// Field receiving keystrokes.
    pub focus: NameField,
}

impl NameForm {
    fn new(player_one: &str, player_two: &str) -> Self {
        Self {
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
            focus: NameField::One,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::One => &mut self.player_one,
            NameField::Two => &mut self.player_two,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NameField::One => NameField::Two,
            NameField::Two => NameField::One,
        };
    }
}

/// Current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Typing player names before a new game.
    NameEntry(NameForm),
    /// Board on screen.
    Playing,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession<Screen>,
    mode: Mode,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Opens on name entry, prefilled with the given names.
    pub fn new(player_one: &str, player_two: &str) -> Self {
        Self {
            session: GameSession::new(Screen::new()),
            mode: Mode::NameEntry(NameForm::new(player_one, player_two)),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession<Screen> {
        &self.session
    }

    /// What the engine has announced so far.
    pub fn screen(&self) -> &Screen {
        self.session.observer()
    }

    /// Current screen mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes one key press to the active screen.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            Mode::NameEntry(_) => self.handle_name_key(key),
            Mode::Playing => self.handle_game_key(key),
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        let Mode::NameEntry(form) = &mut self.mode else {
            return;
        };

        match key {
            KeyCode::Char(c) => form.focused_mut().push(c),
            KeyCode::Backspace => {
                form.focused_mut().pop();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
            KeyCode::Enter if form.focus == NameField::One => form.focus = NameField::Two,
            KeyCode::Enter => {
                let (one, two) = (form.player_one.clone(), form.player_two.clone());
                self.start_game(&one, &two);
            }
            KeyCode::Esc if self.session.phase() == RoundPhase::NotStarted => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                debug!("Name entry cancelled");
                self.mode = Mode::Playing;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        let Some(command) = game_command(key) else {
            return;
        };

        match command {
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.play(self.cursor.to_index()),
            Command::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            Command::NextRound => {
                if let Err(e) = self.session.next_round() {
                    debug!(error = %e, "Ignoring next round request");
                }
            }
            Command::NewGame => {
                let players = self.session.players();
                self.mode = Mode::NameEntry(NameForm::new(
                    players.name(PlayerSlot::One),
                    players.name(PlayerSlot::Two),
                ));
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn start_game(&mut self, player_one: &str, player_two: &str) {
        self.session.start_game(player_one, player_two);
        self.cursor = Position::Center;
        self.mode = Mode::Playing;
        info!("New game from name entry");
    }

    fn play(&mut self, index: usize) {
        if let Err(e) = self.session.play_move(index) {
            debug!(error = %e, "Ignoring illegal move");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_tictactoe::{Cell, Mark};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn playing(one: &str, two: &str) -> App {
        let mut app = App::new(one, two);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        app
    }

    #[test]
    fn test_name_entry_starts_game() {
        let mut app = App::new("", "");
        type_text(&mut app, "Ada");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "Grace");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.mode(), &Mode::Playing);
        assert_eq!(app.session().phase(), RoundPhase::InProgress);
        assert_eq!(app.session().players().name(PlayerSlot::Two), "Grace");
    }

    #[test]
    fn test_blank_names_become_defaults() {
        let app = playing("", "");
        assert_eq!(app.screen().scoreboard(), ["Player 1: 0", "Draws: 0", "Player 2: 0"]);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::new("Adam", "");
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().players().name(PlayerSlot::One), "Ada");
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = playing("Ada", "Grace");
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('1'));

        assert_eq!(app.screen().cells()[4], Cell::Occupied(Mark::X));
        assert_eq!(app.screen().cells()[0], Cell::Occupied(Mark::O));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_play_and_illegal_move_ignored() {
        let mut app = playing("Ada", "Grace");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.screen().turn_line().as_deref(), Some("It's Grace's turn"));
    }

    #[test]
    fn test_full_round_then_next_round() {
        let mut app = playing("Ada", "Grace");
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session().phase(), RoundPhase::InProgress);

        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.screen().result(), Some("Ada wins!"));
        assert!(app.screen().next_round_available());

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session().phase(), RoundPhase::InProgress);
        assert_eq!(app.session().score().player_one(), 1);
    }

    #[test]
    fn test_new_game_resets_score() {
        let mut app = playing("Ada", "Grace");
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Char('s'));
        assert!(matches!(app.mode(), Mode::NameEntry(form) if form.player_one == "Ada"));

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().score().total(), 0);
    }

    #[test]
    fn test_escape_from_name_entry() {
        let mut app = App::new("", "");
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = playing("Ada", "Grace");
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.mode(), &Mode::Playing);
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = playing("", "");
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
