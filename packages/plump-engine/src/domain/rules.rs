//! Round schedule and scoring policy.

pub const DECK_SIZE: usize = 52;

/// Default requested hand-size cap: effectively unbounded, always clamped
/// by the deck split before use.
pub const UNBOUNDED_CARDS: usize = 100;

/// Clamp a requested first-round hand size against the deck split for the
/// seated player count. Floors at 1 so a game always has at least one round.
pub fn clamped_max_cards(requested: usize, player_count: usize) -> usize {
    requested.min(DECK_SIZE / player_count).max(1)
}

// Hand-size schedule: max_cards, max_cards - 1, ..., 1, then held at 1 for
// one extra round per player. `round` is 0-based.
pub fn hand_size_for_round(max_cards: usize, player_count: usize, round: usize) -> Option<usize> {
    if round < max_cards {
        return Some(max_cards - round);
    }
    if round < max_cards + player_count {
        return Some(1);
    }
    None
}

/// Score for a single resolved round: 5 for a met zero bid, 10 + bid for a
/// met single-digit bid, 100 + bid above that, and nothing for a miss.
pub fn round_score(bid: u8, met: bool) -> u32 {
    if !met {
        return 0;
    }
    let bid = u32::from(bid);
    if bid == 0 {
        5
    } else if bid < 10 {
        10 + bid
    } else {
        100 + bid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_shrinks_then_holds_at_one() {
        // max_cards = 5, two players: 5 4 3 2 1, then 1 1, then invalid.
        let expected = [5, 4, 3, 2, 1, 1, 1];
        for (round, &hs) in expected.iter().enumerate() {
            assert_eq!(hand_size_for_round(5, 2, round), Some(hs));
        }
        assert_eq!(hand_size_for_round(5, 2, 7), None);
        assert_eq!(hand_size_for_round(5, 2, 100), None);
    }

    #[test]
    fn schedule_hold_phase_lasts_one_round_per_player() {
        for players in 1..=6usize {
            let max_cards = 4;
            for round in max_cards..max_cards + players {
                assert_eq!(hand_size_for_round(max_cards, players, round), Some(1));
            }
            assert_eq!(hand_size_for_round(max_cards, players, max_cards + players), None);
        }
    }

    #[test]
    fn cap_is_clamped_by_deck_split() {
        assert_eq!(clamped_max_cards(100, 2), 26);
        assert_eq!(clamped_max_cards(5, 2), 5);
        assert_eq!(clamped_max_cards(26, 2), 26);
        assert_eq!(clamped_max_cards(27, 2), 26);
        assert_eq!(clamped_max_cards(100, 1), 52);
        assert_eq!(clamped_max_cards(100, 5), 10);
        // Floor at one round even for a zero request.
        assert_eq!(clamped_max_cards(0, 4), 1);
    }

    #[test]
    fn score_table() {
        assert_eq!(round_score(0, true), 5);
        assert_eq!(round_score(1, true), 11);
        assert_eq!(round_score(9, true), 19);
        assert_eq!(round_score(10, true), 110);
        assert_eq!(round_score(26, true), 126);
        assert_eq!(round_score(0, false), 0);
        assert_eq!(round_score(7, false), 0);
    }
}
