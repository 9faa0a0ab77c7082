//! Key mapping and cursor movement.

use crossterm::event::KeyCode;
use tally_tictactoe::Position;

/// What a key press asks the board screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Play at a board index (digit keys 1-9).
    PlaceAt(usize),
    /// Advance to the next round.
    NextRound,
    /// Back to name entry for a brand-new game.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key on the board screen to a command.
pub fn game_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::PlaceAt(digit as usize - 1)),
        KeyCode::Char('n') => Some(Command::NextRound),
        KeyCode::Char('s') => Some(Command::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_indices() {
        assert_eq!(game_command(KeyCode::Char('1')), Some(Command::PlaceAt(0)));
        assert_eq!(game_command(KeyCode::Char('9')), Some(Command::PlaceAt(8)));
        assert_eq!(game_command(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(game_command(KeyCode::Enter), Some(Command::PlaceAtCursor));
        assert_eq!(game_command(KeyCode::Char('n')), Some(Command::NextRound));
        assert_eq!(game_command(KeyCode::Char('s')), Some(Command::NewGame));
        assert_eq!(game_command(KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }
}
