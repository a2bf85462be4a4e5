use crate::domain::engine::GameEngine;
use crate::domain::state::{GameStatus, Phase, PlayerAction};
use crate::errors::DomainError;

/// Two players, five-card opening round, already dealt.
fn dealt_game() -> GameEngine {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();
    assert!(game.set_max_cards(5).unwrap());
    assert_eq!(game.deal(Some(1)).unwrap(), 5);
    game
}

#[test]
fn bids_collect_in_order_and_open_play() {
    let mut game = dealt_game();

    let out = game.action(0, PlayerAction::Bid(3)).unwrap();
    assert_eq!(out.phase, Phase::Bid);
    assert!(!out.round_complete);
    assert_eq!(game.current_bids().unwrap(), vec![3]);

    let out = game.action(1, PlayerAction::Bid(1)).unwrap();
    assert_eq!(out.phase, Phase::Play);
    assert_eq!(game.current_bids().unwrap(), vec![3, 1]);
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            round: 0,
            phase: Phase::Play,
            to_act: 0
        }
    );
}

#[test]
fn a_bid_cannot_exceed_the_cards_in_play() {
    let mut game = dealt_game();

    let err = game.action(0, PlayerAction::Bid(6)).unwrap_err();
    assert!(matches!(err, DomainError::BidTooHigh(_)));
    assert_eq!(game.current_bids().unwrap(), Vec::<u8>::new());

    // Bidding exactly the number of cards is fine for a non-final bidder.
    assert!(game.action(0, PlayerAction::Bid(5)).is_ok());
    assert_eq!(game.current_bids().unwrap(), vec![5]);
}

#[test]
fn the_final_bidder_cannot_complete_an_exact_total() {
    let mut game = dealt_game();

    game.action(0, PlayerAction::Bid(5)).unwrap();
    let err = game.action(1, PlayerAction::Bid(0)).unwrap_err();
    assert!(matches!(err, DomainError::RestrictedBid(_)));
    assert_eq!(game.current_bids().unwrap(), vec![5]);
    // Any total other than the cards dealt is allowed.
    assert!(game.action(1, PlayerAction::Bid(1)).is_ok());
    assert_eq!(game.current_bids().unwrap(), vec![5, 1]);
}

#[test]
fn the_restriction_does_not_bind_earlier_bidders() {
    let mut game = GameEngine::new();
    for name in ["Alice", "Bob", "Carol"] {
        game.add_player(name).unwrap();
    }
    game.set_max_cards(4).unwrap();
    game.deal(Some(2)).unwrap();

    // First bidder may take the full round even though the total matches.
    assert!(game.action(0, PlayerAction::Bid(4)).is_ok());
    assert!(game.action(1, PlayerAction::Bid(0)).is_ok());
    // Final bidder: 4 + 0 + 0 == 4 is blocked, anything else passes.
    assert!(matches!(
        game.action(2, PlayerAction::Bid(0)),
        Err(DomainError::RestrictedBid(_))
    ));
    assert!(game.action(2, PlayerAction::Bid(1)).is_ok());
    assert_eq!(game.current_bids().unwrap(), vec![4, 0, 1]);
}

#[test]
fn acting_out_of_turn_changes_nothing() {
    let mut game = dealt_game();

    let err = game.action(1, PlayerAction::Bid(2)).unwrap_err();
    assert!(matches!(err, DomainError::OutOfTurn(_)));
    assert_eq!(game.current_bids().unwrap(), Vec::<u8>::new());
    assert!(game.players()[1].rounds().is_empty());
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            round: 0,
            phase: Phase::Bid,
            to_act: 0
        }
    );
}

#[test]
fn a_player_cannot_bid_twice_in_a_round() {
    let mut game = dealt_game();

    game.action(0, PlayerAction::Bid(5)).unwrap();
    // The turn moved on, so a second bid from seat 0 is out of turn.
    let err = game.action(0, PlayerAction::Bid(1)).unwrap_err();
    assert!(matches!(err, DomainError::OutOfTurn(_)));
    assert_eq!(game.current_bids().unwrap(), vec![5]);
    assert_eq!(game.players()[0].rounds().len(), 1);
}

#[test]
fn playing_during_bidding_is_rejected() {
    let mut game = dealt_game();

    let err = game.action(0, PlayerAction::Play).unwrap_err();
    assert!(matches!(err, DomainError::PhaseMismatch(_)));
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            round: 0,
            phase: Phase::Bid,
            to_act: 0
        }
    );
}

#[test]
fn acting_before_any_deal_is_rejected() {
    let mut game = GameEngine::new();
    game.add_player("Alice").unwrap();
    game.add_player("Bob").unwrap();

    let err = game.action(0, PlayerAction::Bid(0)).unwrap_err();
    assert!(matches!(err, DomainError::PhaseMismatch(_)));
    assert_eq!(game.status(), GameStatus::Idle { round: 0 });
}

#[test]
fn a_full_play_pass_completes_the_round() {
    let mut game = dealt_game();
    game.action(0, PlayerAction::Bid(3)).unwrap();
    game.action(1, PlayerAction::Bid(1)).unwrap();

    let out = game.action(0, PlayerAction::Play).unwrap();
    assert!(!out.round_complete);
    let out = game.action(1, PlayerAction::Play).unwrap();
    assert!(out.round_complete);
    assert_eq!(out.phase, Phase::Play);

    // The engine stays put until the caller deals the next round.
    assert_eq!(game.current_round(), 0);
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            round: 0,
            phase: Phase::Play,
            to_act: 0
        }
    );
}

#[test]
fn bidding_during_play_is_rejected() {
    let mut game = dealt_game();
    game.action(0, PlayerAction::Bid(3)).unwrap();
    game.action(1, PlayerAction::Bid(1)).unwrap();

    let err = game.action(0, PlayerAction::Bid(2)).unwrap_err();
    assert!(matches!(err, DomainError::PhaseMismatch(_)));
    assert_eq!(game.current_bids().unwrap(), vec![3, 1]);
}

#[test]
fn stale_bids_do_not_leak_into_a_new_round() {
    let mut game = dealt_game();
    game.action(0, PlayerAction::Bid(3)).unwrap();
    game.action(1, PlayerAction::Bid(1)).unwrap();
    game.action(0, PlayerAction::Play).unwrap();
    game.action(1, PlayerAction::Play).unwrap();

    game.deal(Some(2)).unwrap();
    // Both players carry bid history, but none of it belongs to this round.
    assert_eq!(game.current_bids().unwrap(), Vec::<u8>::new());
}

#[test]
fn second_round_bidding_starts_at_the_rotated_lead() {
    let mut game = dealt_game();
    game.action(0, PlayerAction::Bid(3)).unwrap();
    game.action(1, PlayerAction::Bid(1)).unwrap();
    game.action(0, PlayerAction::Play).unwrap();
    game.action(1, PlayerAction::Play).unwrap();

    assert_eq!(game.deal(Some(2)).unwrap(), 4);
    // Seat 1 leads round 1; seat 0 must wait.
    assert!(matches!(
        game.action(0, PlayerAction::Bid(1)),
        Err(DomainError::OutOfTurn(_))
    ));
    game.action(1, PlayerAction::Bid(2)).unwrap();
    assert_eq!(game.current_bids().unwrap(), vec![2]);
    // Seat 0 is now the final bidder: 2 + 2 == 4 is blocked.
    assert!(matches!(
        game.action(0, PlayerAction::Bid(2)),
        Err(DomainError::RestrictedBid(_))
    ));
    game.action(0, PlayerAction::Bid(3)).unwrap();
    assert_eq!(game.current_bids().unwrap(), vec![2, 3]);
}
