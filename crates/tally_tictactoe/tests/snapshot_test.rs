//! Tests for the serializable session snapshot.

use tally_tictactoe::{GameSession, NullObserver, Outcome, PlayerSlot, RoundPhase, SessionSnapshot};

#[test]
fn test_snapshot_reflects_round_over() {
    let mut session = GameSession::new(NullObserver);
    session.start_game("Ada", "Grace");
    for index in [0, 3, 1, 4, 2] {
        session.play_move(index).unwrap();
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, RoundPhase::RoundOver);
    assert_eq!(snapshot.rounds_completed, 1);
    assert_eq!(snapshot.last_outcome, Some(Outcome::Winner(PlayerSlot::One)));
    assert_eq!(snapshot.symbols(), ["X", "X", "X", "O", "O", "", "", "", ""]);
    assert_eq!(snapshot.players.name(PlayerSlot::Two), "Grace");
}

#[test]
fn test_snapshot_json() {
    let mut session = GameSession::new(NullObserver);
    session.start_game("Ada", "");
    session.play_move(4).unwrap();

    let json = serde_json::to_value(session.snapshot()).expect("serializes");
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["current"], "Two");
    assert_eq!(json["cells"][4]["Occupied"], "X");
    assert_eq!(json["score"]["draws"], 0);

    let back: SessionSnapshot = serde_json::from_value(json).expect("deserializes");
    assert_eq!(back, session.snapshot());
}
