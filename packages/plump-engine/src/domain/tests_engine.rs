use crate::domain::engine::GameEngine;
use crate::domain::state::GameStatus;
use crate::errors::DomainError;

#[test]
fn a_new_game_is_empty_and_idle() {
    let game = GameEngine::new();
    assert!(game.players().is_empty());
    assert!(game.deck().is_empty());
    assert!(!game.started());
    assert_eq!(game.status(), GameStatus::Idle { round: 0 });
}

#[test]
fn seating_players_grows_the_schedule() {
    let mut game = GameEngine::new();
    assert_eq!(game.add_player("Alice").unwrap(), 0);
    // One player may take the whole deck.
    assert_eq!(game.max_cards(), 52);
    assert_eq!(game.add_player("Bob").unwrap(), 1);
    assert_eq!(game.max_cards(), 26);
    assert_eq!(game.number_of_rounds(), 26);
    assert_eq!(game.players()[0].name(), "Alice");
    assert_eq!(game.players()[1].name(), "Bob");
}

#[test]
fn duplicate_names_are_rejected() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    let err = game.add_player("Alice").unwrap_err();
    assert!(matches!(err, DomainError::DuplicatePlayer(_)));
    assert_eq!(game.players().len(), 1);
    assert_eq!(game.player(0).unwrap().name(), "Alice");
    assert!(game.player(1).is_none());
}

#[test]
fn cap_requests_report_whether_they_were_clamped() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();

    assert!(game.set_max_cards(5).unwrap());
    assert_eq!(game.max_cards(), 5);
    assert!(game.set_max_cards(26).unwrap());
    assert_eq!(game.max_cards(), 26);
    assert!(!game.set_max_cards(27).unwrap());
    assert_eq!(game.max_cards(), 26);
}

#[test]
fn cap_requests_need_a_roster() {
    let mut game = GameEngine::new();
    assert!(matches!(
        game.set_max_cards(5),
        Err(DomainError::EmptyRoster(_))
    ));
}

#[test]
fn seating_after_a_cap_request_re_clamps_against_it() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    assert!(game.set_max_cards(30).unwrap());
    assert_eq!(game.max_cards(), 30);

    // Two players can only split 26 each; the request of 30 still stands.
    game.add_player("Bob").unwrap();
    assert_eq!(game.max_cards(), 26);
    game.add_player("Carol").unwrap();
    assert_eq!(game.max_cards(), 17);
}

#[test]
fn the_first_deal_freezes_roster_and_cap() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();
    game.set_max_cards(5).unwrap();
    game.deal(Some(1)).unwrap();

    let err = game.add_player("Eve").unwrap_err();
    assert!(matches!(err, DomainError::RosterClosed(_)));
    assert_eq!(game.players().len(), 2);

    let err = game.set_max_cards(6).unwrap_err();
    assert!(matches!(err, DomainError::RosterClosed(_)));
    assert_eq!(game.max_cards(), 5);
}

#[test]
fn schedule_queries_match_the_configured_cap() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();
    game.set_max_cards(5).unwrap();

    for round in 0..5 {
        assert_eq!(game.hand_size_for_round(round).unwrap(), 5 - round);
    }
    assert_eq!(game.hand_size_for_round(5).unwrap(), 1);
    assert_eq!(game.hand_size_for_round(6).unwrap(), 1);
    assert!(matches!(
        game.hand_size_for_round(7),
        Err(DomainError::InvalidRound(_))
    ));
}
