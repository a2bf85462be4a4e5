//! Property tests for the bidding state machine (pure domain, no I/O).

use proptest::prelude::*;

use crate::domain::engine::GameEngine;
use crate::domain::state::{next_seat, PlayerAction};
use crate::errors::DomainError;

const NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

fn dealt_game(player_count: usize, cap: usize, seed: u64) -> GameEngine {
    let mut game = GameEngine::new();
    for name in NAMES.iter().take(player_count) {
        game.add_player(name).unwrap();
    }
    game.set_max_cards(cap).unwrap();
    game.deal(Some(seed)).unwrap();
    game
}

proptest! {
    /// A completed bidding round never sums to the number of cards dealt,
    /// no matter what a (retrying) driver proposes.
    #[test]
    fn prop_round_totals_never_match_cards_dealt(
        player_count in 2usize..=6,
        cap in 2usize..=8,
        seed in any::<u64>(),
        proposals in prop::collection::vec(0usize..=8, 6),
    ) {
        let mut game = dealt_game(player_count, cap, seed);
        let hand = game.cards_left();

        for (turn, &proposal) in proposals.iter().take(player_count).enumerate() {
            let bid = proposal.min(hand) as u8;
            let seat = turn % player_count;
            match game.action(seat, PlayerAction::Bid(bid)) {
                Ok(_) => {}
                Err(DomainError::RestrictedBid(_)) => {
                    // Exactly one value is blocked; any neighbor is legal.
                    let retry = if usize::from(bid) < hand { bid + 1 } else { bid - 1 };
                    game.action(seat, PlayerAction::Bid(retry)).unwrap();
                }
                Err(other) => prop_assert!(false, "unexpected rejection: {}", other),
            }
        }

        let bids = game.current_bids().unwrap();
        prop_assert_eq!(bids.len(), player_count);
        let total: usize = bids.iter().map(|&b| usize::from(b)).sum();
        prop_assert_ne!(total, hand, "bids {:?} sum to the cards dealt", bids);
    }

    /// The only blocked value for the final bidder is the one completing an
    /// exact total, and the rejection leaves the round untouched.
    #[test]
    fn prop_final_bidder_blocked_only_on_exact_total(
        player_count in 2usize..=6,
        cap in 2usize..=8,
        seed in any::<u64>(),
        early in prop::collection::vec(0usize..=8, 5),
    ) {
        let mut game = dealt_game(player_count, cap, seed);
        let hand = game.cards_left();

        for (turn, &proposal) in early.iter().take(player_count - 1).enumerate() {
            let bid = proposal.min(hand) as u8;
            game.action(turn, PlayerAction::Bid(bid)).unwrap();
        }
        let final_seat = player_count - 1;
        let placed: usize = game
            .current_bids()
            .unwrap()
            .iter()
            .map(|&b| usize::from(b))
            .sum();

        for bid in 0..=hand {
            let before = game.current_bids().unwrap();
            let result = game.action(final_seat, PlayerAction::Bid(bid as u8));
            if placed + bid == hand {
                prop_assert!(matches!(result, Err(DomainError::RestrictedBid(_))));
                prop_assert_eq!(game.current_bids().unwrap(), before);
            } else {
                prop_assert!(result.is_ok());
                break;
            }
        }
    }

    /// Out-of-turn and wrong-phase submissions reject without mutating
    /// turn, phase, or any player history.
    #[test]
    fn prop_rejections_do_not_mutate(
        player_count in 2usize..=6,
        cap in 2usize..=8,
        seed in any::<u64>(),
        bid in 0u8..=8,
    ) {
        let mut game = dealt_game(player_count, cap, seed);
        let wrong_seat = next_seat(0, player_count);

        let status_before = game.status();
        let bids_before = game.current_bids().unwrap();

        prop_assert!(game.action(wrong_seat, PlayerAction::Bid(bid)).is_err());
        prop_assert!(game.action(0, PlayerAction::Play).is_err());

        prop_assert_eq!(game.status(), status_before);
        prop_assert_eq!(game.current_bids().unwrap(), bids_before);
        for p in game.players() {
            prop_assert!(p.rounds().is_empty());
        }
    }
}
