//! Tally tic-tac-toe - a two-player session engine with score tracking.
//!
//! # Architecture
//!
//! - **Board**: nine cells, placement that never overwrites, reset
//! - **Rules**: pure win/draw evaluation over the eight fixed lines
//! - **Session**: players, turn order, round lifecycle, cumulative score
//! - **Observer**: the notification boundary toward whatever draws the game
//!
//! The engine never touches a display. Every state change is announced
//! through [`SessionObserver`], so a terminal UI, a test recorder or
//! nothing at all can sit on the other side.
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{GameSession, MoveResult, NullObserver, Outcome, PlayerSlot};
//!
//! let mut session = GameSession::new(NullObserver);
//! session.start_game("Ada", "");
//!
//! for index in [0, 3, 1, 4] {
//!     session.play_move(index).unwrap();
//! }
//! let result = session.play_move(2).unwrap();
//!
//! assert_eq!(result, MoveResult::RoundOver(Outcome::Winner(PlayerSlot::One)));
//! assert_eq!(session.score().player_one(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod invariants;
mod observer;
mod phases;
mod player;
mod position;
mod rules;
mod score;
mod session;
mod snapshot;
mod types;

// Crate-level exports - Board and cells
pub use position::Position;
pub use types::{Board, Cell, Mark};

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full, winning_line, LINES};

// Crate-level exports - Players and score
pub use player::{Player, PlayerSlot, Players};
pub use score::Score;

// Crate-level exports - Session state machine
pub use action::Move;
pub use phases::{MoveResult, Outcome, RoundPhase};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;

// Crate-level exports - Observer boundary
pub use observer::{EventLog, NullObserver, SessionEvent, SessionObserver};

// Crate-level exports - Errors
pub use error::{MoveError, RoundError};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, ScoreTallyInvariant, SessionInvariants,
};
