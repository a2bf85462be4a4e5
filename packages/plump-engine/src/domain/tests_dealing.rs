use std::collections::HashSet;

use crate::domain::engine::GameEngine;
use crate::domain::state::{GameStatus, Phase};
use crate::domain::Card;
use crate::errors::DomainError;

fn seated(names: &[&str]) -> GameEngine {
    let mut game = GameEngine::new();
    for name in names {
        game.add_player(name).unwrap();
    }
    game
}

#[test]
fn deal_splits_the_deck_between_players() {
    let mut game = seated(&["Alice", "Bob"]);
    assert!(game.set_max_cards(5).unwrap());

    assert_eq!(game.deal(Some(1)).unwrap(), 5);
    assert_eq!(game.players()[0].hand().len(), 5);
    assert_eq!(game.players()[1].hand().len(), 5);
    assert_eq!(game.deck().len(), 42);
    assert!(game.started());
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
fn dealt_cards_and_deck_remain_one_full_set() {
    let mut game = seated(&["Alice", "Bob", "Carol"]);
    game.set_max_cards(7).unwrap();
    game.deal(Some(99)).unwrap();

    let mut all: Vec<Card> = game.deck().cards().to_vec();
    for p in game.players() {
        all.extend_from_slice(p.hand());
    }
    assert_eq!(all.len(), 52);
    let distinct: HashSet<Card> = all.into_iter().collect();
    assert_eq!(distinct.len(), 52);
}

#[test]
fn equal_seeds_produce_equal_hands() {
    let mut a = seated(&["Alice", "Bob"]);
    let mut b = seated(&["Alice", "Bob"]);
    a.set_max_cards(5).unwrap();
    b.set_max_cards(5).unwrap();
    a.deal(Some(12345)).unwrap();
    b.deal(Some(12345)).unwrap();
    assert_eq!(a.players()[0].hand(), b.players()[0].hand());
    assert_eq!(a.players()[1].hand(), b.players()[1].hand());

    let mut c = seated(&["Alice", "Bob"]);
    c.set_max_cards(5).unwrap();
    c.deal(Some(54321)).unwrap();
    assert_ne!(a.players()[0].hand(), c.players()[0].hand());
}

#[test]
fn cards_go_out_one_at_a_time_from_the_front() {
    use rand::SeedableRng;

    use crate::domain::Deck;

    let mut game = seated(&["Alice", "Bob"]);
    game.set_max_cards(3).unwrap();
    game.deal(Some(5)).unwrap();

    // Replay the shuffle: card i of the shuffled deck lands with seat
    // i % players, one card per pass.
    let mut deck = Deck::full();
    deck.shuffle(&mut rand_chacha::ChaCha8Rng::seed_from_u64(5));
    let cards = deck.cards();
    assert_eq!(
        game.players()[0].hand(),
        &[cards[0], cards[2], cards[4]],
        "lead seat takes the even positions"
    );
    assert_eq!(game.players()[1].hand(), &[cards[1], cards[3], cards[5]]);
}

#[test]
fn seeded_engine_matches_a_seeded_deal() {
    let mut reference = seated(&["Alice", "Bob"]);
    reference.set_max_cards(3).unwrap();
    reference.deal(Some(5)).unwrap();

    let mut replay = GameEngine::with_seed(5);
    replay.add_player("Alice").unwrap();
    replay.add_player("Bob").unwrap();
    replay.set_max_cards(3).unwrap();
    replay.deal(None).unwrap();

    assert_eq!(reference.players()[0].hand(), replay.players()[0].hand());
    assert_eq!(reference.players()[1].hand(), replay.players()[1].hand());
}

#[test]
fn redeal_advances_the_round_and_rotates_the_lead() {
    let mut game = seated(&["Alice", "Bob"]);
    game.set_max_cards(3).unwrap();

    assert_eq!(game.deal(Some(1)).unwrap(), 3);
    assert_eq!(game.current_round(), 0);
    assert_eq!(game.first_player(), 0);

    assert_eq!(game.deal(Some(2)).unwrap(), 2);
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.first_player(), 1);
    assert_eq!(game.players()[0].hand().len(), 2);
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            round: 1,
            phase: Phase::Bid,
            to_act: 1
        }
    );
}

#[test]
fn deal_clears_previous_hands_before_refilling() {
    let mut game = seated(&["Alice", "Bob"]);
    game.set_max_cards(4).unwrap();
    game.deal(Some(1)).unwrap();
    game.deal(Some(2)).unwrap();
    // Second round deals one card fewer, not one round's worth on top.
    assert_eq!(game.players()[0].hand().len(), 3);
    assert_eq!(game.players()[1].hand().len(), 3);
    assert_eq!(game.deck().len(), 52 - 6);
}

#[test]
fn dealing_past_the_schedule_fails_without_mutating() {
    let mut game = seated(&["Alice", "Bob"]);
    game.set_max_cards(2).unwrap();

    // Shrink rounds: 2, 1. Hold-at-one rounds: one per player.
    for expected in [2, 1, 1, 1] {
        assert_eq!(game.deal(Some(3)).unwrap(), expected);
    }
    let round_before = game.current_round();
    let first_before = game.first_player();
    let hand_before: Vec<Card> = game.players()[0].hand().to_vec();

    let err = game.deal(Some(3)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidRound(_)));
    assert_eq!(game.current_round(), round_before);
    assert_eq!(game.first_player(), first_before);
    assert_eq!(game.players()[0].hand(), hand_before.as_slice());
}

#[test]
fn deal_requires_a_seated_roster() {
    let mut game = GameEngine::new();
    assert!(matches!(
        game.deal(Some(1)),
        Err(DomainError::EmptyRoster(_))
    ));
}
