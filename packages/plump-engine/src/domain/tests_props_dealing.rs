//! Property tests for dealing and the hand-size schedule.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::engine::GameEngine;
use crate::domain::rules::{clamped_max_cards, hand_size_for_round};
use crate::domain::Card;

const NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

fn seated_game(player_count: usize) -> GameEngine {
    let mut game = GameEngine::new();
    for name in NAMES.iter().take(player_count) {
        game.add_player(name).unwrap();
    }
    game
}

proptest! {
    /// Every deal hands out exactly `hand_size` cards per player and leaves
    /// the deck plus hands a duplicate-free 52-card set.
    #[test]
    fn prop_deal_conserves_the_deck(
        player_count in 1usize..=8,
        requested in 1usize..=60,
        seed in any::<u64>(),
    ) {
        let mut game = seated_game(player_count);
        game.set_max_cards(requested).unwrap();

        let hand_size = game.deal(Some(seed)).unwrap();
        prop_assert_eq!(hand_size, game.max_cards());
        prop_assert_eq!(game.deck().len(), 52 - player_count * hand_size);

        let mut all: Vec<Card> = game.deck().cards().to_vec();
        for p in game.players() {
            prop_assert_eq!(p.hand().len(), hand_size);
            all.extend_from_slice(p.hand());
        }
        let distinct: HashSet<Card> = all.iter().copied().collect();
        prop_assert_eq!(distinct.len(), 52);
    }

    /// The stored cap is the clamped request, never above the deck split,
    /// never below one.
    #[test]
    fn prop_cap_is_clamped_to_the_deck_split(
        player_count in 1usize..=8,
        requested in 0usize..=100,
    ) {
        let mut game = seated_game(player_count);
        let unclamped = game.set_max_cards(requested).unwrap();

        prop_assert_eq!(game.max_cards(), clamped_max_cards(requested, player_count));
        prop_assert!(game.max_cards() >= 1);
        prop_assert!(game.max_cards() <= 52 / player_count || game.max_cards() == 1);
        prop_assert_eq!(unclamped, game.max_cards() == requested);
    }

    /// The schedule shrinks one card per round, holds at one for one round
    /// per player, then ends.
    #[test]
    fn prop_schedule_shape(
        player_count in 1usize..=8,
        max_cards in 1usize..=26,
    ) {
        for round in 0..max_cards {
            prop_assert_eq!(
                hand_size_for_round(max_cards, player_count, round),
                Some(max_cards - round)
            );
        }
        for round in max_cards..max_cards + player_count {
            prop_assert_eq!(hand_size_for_round(max_cards, player_count, round), Some(1));
        }
        prop_assert_eq!(
            hand_size_for_round(max_cards, player_count, max_cards + player_count),
            None
        );
    }

    /// Driving deals through the whole schedule succeeds exactly
    /// `max_cards + player_count` times, with hand sizes matching the
    /// schedule, and then fails.
    #[test]
    fn prop_game_length_matches_the_schedule(
        player_count in 2usize..=5,
        requested in 1usize..=6,
        seed in any::<u64>(),
    ) {
        let mut game = seated_game(player_count);
        game.set_max_cards(requested).unwrap();
        let max_cards = game.max_cards();

        for round in 0..max_cards + player_count {
            let dealt = game.deal(Some(seed)).unwrap();
            prop_assert_eq!(game.current_round(), round);
            prop_assert_eq!(dealt, game.hand_size_for_round(round).unwrap());
            prop_assert_eq!(game.first_player(), round % player_count);
        }
        prop_assert!(game.deal(Some(seed)).is_err());
    }
}
