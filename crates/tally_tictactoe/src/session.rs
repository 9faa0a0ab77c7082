//! The session state machine: players, turns, rounds and score.

use crate::action::Move;
use crate::contracts::{assert_invariants, Contract, MoveContract};
use crate::error::{MoveError, RoundError};
use crate::observer::SessionObserver;
use crate::phases::{MoveResult, Outcome, RoundPhase};
use crate::player::{Player, PlayerSlot, Players};
use crate::position::Position;
use crate::rules;
use crate::score::Score;
use crate::snapshot::SessionSnapshot;
use crate::types::Board;
use tracing::{debug, info, instrument, warn};

/// One game session: two fixed players and any number of rounds.
///
/// The session exclusively owns the board and the score. Every visible
/// change is pushed to the observer `O` in the order a display needs it.
///
/// Phases:
/// - `NotStarted` until [`start_game`](Self::start_game)
/// - `InProgress` while moves are accepted
/// - `RoundOver` after a win or draw, until [`next_round`](Self::next_round)
///   or another `start_game`
#[derive(Debug, Clone)]
pub struct GameSession<O> {
    board: Board,
    players: Players,
    current: PlayerSlot,
    phase: RoundPhase,
    score: Score,
    history: Vec<Move>,
    rounds_completed: u32,
    last_outcome: Option<Outcome>,
    observer: O,
}

impl<O: SessionObserver> GameSession<O> {
    /// Creates a session that has not started yet.
    ///
    /// Nothing is sent to the observer until the first `start_game`.
    #[instrument(skip(observer))]
    pub fn new(observer: O) -> Self {
        debug!("Creating game session");
        Self {
            board: Board::new(),
            players: Players::from_names("", ""),
            current: PlayerSlot::One,
            phase: RoundPhase::NotStarted,
            score: Score::new(),
            history: Vec::new(),
            rounds_completed: 0,
            last_outcome: None,
            observer,
        }
    }

    /// Starts a brand-new game, from any phase.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". The score goes
    /// back to zero, the board is cleared and player one moves first.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self, player_one: &str, player_two: &str) {
        self.players = Players::from_names(player_one, player_two);
        self.score = Score::new();
        self.rounds_completed = 0;
        self.clear_round();

        self.observer.render_board(self.board.cells());
        self.observer.render_scoreboard(
            self.players.name(PlayerSlot::One),
            self.players.name(PlayerSlot::Two),
        );
        self.observer
            .update_current_turn(self.players.name(self.current));
        self.observer.clear_result();
        self.observer.set_next_round_available(false);

        info!(
            player_one = %self.players.name(PlayerSlot::One),
            player_two = %self.players.name(PlayerSlot::Two),
            "Game started"
        );
        assert_invariants(self);
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// After a successful placement the board is re-rendered, then the
    /// round is checked in a fixed order: win, draw, otherwise the turn
    /// passes to the other player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundNotInProgress`] outside `InProgress`
    /// - [`MoveError::OutOfRange`] for an index past 8
    /// - [`MoveError::SquareOccupied`] for a taken cell
    ///
    /// None of these touch the session or the observer.
    ///
    /// # Panics
    ///
    /// In debug builds, if the move leaves a session invariant broken.
    #[instrument(skip(self), fields(phase = %self.phase, player = %self.current))]
    pub fn play_move(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        if let Err(e) = MoveContract::pre(&*self, &index) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let slot = self.current;
        let position = self.board.place(index, slot.mark())?;
        let mv = Move::new(slot, position);
        self.history.push(mv);
        debug!(%mv, board = %self.board.display(), "Mark placed");

        self.observer.render_board(self.board.cells());

        let outcome = match rules::check_winner(&self.board) {
            Some(mark) => Some(Outcome::Winner(PlayerSlot::for_mark(mark))),
            None if rules::is_full(&self.board) => Some(Outcome::Draw),
            None => None,
        };

        let result = match outcome {
            Some(outcome) => {
                self.finish_round(outcome);
                MoveResult::RoundOver(outcome)
            }
            None => {
                self.current = slot.opponent();
                self.observer
                    .update_current_turn(self.players.name(self.current));
                MoveResult::Continue { next: self.current }
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&*self) {
            tracing::error!(error = %e, "Move broke a session invariant");
            panic!("{e}");
        }

        Ok(result)
    }

    /// Starts the next round of the same game.
    ///
    /// Clears the board, hands the first move back to player one and
    /// keeps the score.
    ///
    /// # Errors
    ///
    /// [`RoundError::RoundNotOver`] unless the last round has finished.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn next_round(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::RoundOver {
            warn!("Next round requested before the round ended");
            return Err(RoundError::RoundNotOver(self.phase));
        }

        self.clear_round();

        self.observer.render_board(self.board.cells());
        self.observer
            .update_current_turn(self.players.name(self.current));
        self.observer.clear_result();
        self.observer.set_next_round_available(false);

        info!(round = self.rounds_completed + 1, "Next round started");
        assert_invariants(self);
        Ok(())
    }

    /// Records a finished round and announces it.
    fn finish_round(&mut self, outcome: Outcome) {
        let text = match outcome {
            Outcome::Winner(slot) => format!("{} wins!", self.players.name(slot)),
            Outcome::Draw => "It's a draw!".to_string(),
        };
        self.observer.display_result(&text);

        self.score.record(outcome);
        self.rounds_completed += 1;
        self.observer.update_scoreboard(
            &self.score,
            self.players.name(PlayerSlot::One),
            self.players.name(PlayerSlot::Two),
        );

        self.phase = RoundPhase::RoundOver;
        self.last_outcome = Some(outcome);
        self.observer.set_next_round_available(true);

        info!(
            result = %text,
            player_one = self.score.player_one(),
            player_two = self.score.player_two(),
            draws = self.score.draws(),
            "Round over"
        );
    }
}

impl<O> GameSession<O> {
    /// Resets per-round state; score and players are untouched.
    fn clear_round(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current = PlayerSlot::One;
        self.phase = RoundPhase::InProgress;
        self.last_outcome = None;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Seat of the player to move (or who made the last move, once a round is over).
    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.current)
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of rounds finished since the game started.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Outcome of the round that just ended, while in `RoundOver`.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase == RoundPhase::InProgress
    }

    /// The completed line, if the round ended in a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(line, _)| line)
    }

    /// Empty positions, or none when no round is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_in_progress() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Serializable view of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_parts(
            self.phase,
            &self.board,
            &self.players,
            self.current,
            self.score,
            self.rounds_completed,
            self.last_outcome,
        )
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Direct board access so invariant tests can corrupt state.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{EventLog, NullObserver};

    fn started() -> GameSession<EventLog> {
        let mut session = GameSession::new(EventLog::new());
        session.start_game("Ada", "Grace");
        session.observer_mut().drain();
        session
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = GameSession::new(NullObserver);
        assert_eq!(session.phase(), RoundPhase::NotStarted);
        assert!(session.valid_moves().is_empty());
    }

    #[test]
    fn test_move_before_start_is_rejected() {
        let mut session = GameSession::new(EventLog::new());
        assert_eq!(
            session.play_move(4),
            Err(MoveError::RoundNotInProgress(RoundPhase::NotStarted))
        );
        assert!(session.observer().is_empty());
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = started();
        assert_eq!(
            session.play_move(0),
            Ok(MoveResult::Continue { next: PlayerSlot::Two })
        );
        assert_eq!(
            session.play_move(4),
            Ok(MoveResult::Continue { next: PlayerSlot::One })
        );
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_player().name(), "Ada");
    }

    #[test]
    fn test_occupied_cell_is_silent_no_op() {
        let mut session = started();
        session.play_move(4).unwrap();
        session.observer_mut().drain();
        let before = session.snapshot();

        assert_eq!(
            session.play_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.snapshot(), before);
        assert!(session.observer().is_empty());
    }

    #[test]
    fn test_next_round_requires_round_over() {
        let mut session = started();
        assert_eq!(
            session.next_round(),
            Err(RoundError::RoundNotOver(RoundPhase::InProgress))
        );
        assert!(session.observer().is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Postcondition failed")]
    fn test_broken_invariant_panics_instead_of_erroring() {
        let mut session = started();
        session.board_mut().place(8, crate::Mark::O).unwrap();
        let _ = session.play_move(0);
    }

    #[test]
    fn test_winning_line_after_win() {
        let mut session = started();
        for index in [0, 3, 1, 4, 2] {
            session.play_move(index).unwrap();
        }
        assert_eq!(
            session.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(session.last_outcome(), Some(Outcome::Winner(PlayerSlot::One)));
    }
}
