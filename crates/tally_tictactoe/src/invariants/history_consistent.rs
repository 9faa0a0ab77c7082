//! History consistency invariant: the board is exactly the moves played.

use super::Invariant;
use crate::{Cell, GameSession, Mark, PlayerSlot};

/// Invariant: every recorded move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl<O> Invariant<GameSession<O>> for HistoryConsistentInvariant {
    fn holds(session: &GameSession<O>) -> bool {
        let board = session.board();
        let history = session.history();

        let played = |slot: PlayerSlot| history.iter().filter(|mv| mv.player == slot).count();

        board.count(Mark::X) == played(PlayerSlot::One)
            && board.count(Mark::O) == played(PlayerSlot::Two)
            && history
                .iter()
                .all(|mv| board.get(mv.position) == Cell::Occupied(mv.player.mark()))
    }

    fn description() -> &'static str {
        "Board matches the moves of the current round"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullObserver;

    #[test]
    fn test_holds_after_moves() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        session.play_move(4).unwrap();
        session.play_move(0).unwrap();
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_detects_mark_outside_history() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        session.play_move(4).unwrap();

        session.board_mut().place(0, Mark::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_detects_cleared_board() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        session.play_move(4).unwrap();

        session.board_mut().reset();
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_detects_wrong_mark_count() {
        let mut session = GameSession::new(NullObserver);
        session.start_game("", "");
        session.play_move(4).unwrap();

        session.board_mut().reset();
        session.board_mut().place(4, Mark::O).unwrap();
        assert_eq!(session.board().count(Mark::X), 0);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
