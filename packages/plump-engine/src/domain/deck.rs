//! The 52-card deck: canonical construction, shuffling, and drawing.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, ALL_RANKS, ALL_SUITS};
use super::rules::DECK_SIZE;
use crate::errors::DomainError;

/// An ordered sequence of cards. The front (index 0) is the draw position.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// A freshly filled 52-card deck in canonical order.
    pub fn full() -> Self {
        let mut deck = Self::new();
        deck.fill();
        deck
    }

    /// Reset to the full deck: one card per (suit, rank) pair, suit-major
    /// order. Idempotent; any previous contents are discarded.
    pub fn fill(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for suit in ALL_SUITS {
            for rank in ALL_RANKS {
                self.cards.push(Card { suit, rank });
            }
        }
    }

    /// Fisher-Yates shuffle in place with the caller's RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 52);
        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn fill_is_idempotent() {
        let mut deck = Deck::full();
        deck.draw().unwrap();
        deck.draw().unwrap();
        deck.fill();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.cards(), Deck::full().cards());
    }

    #[test]
    fn draw_removes_the_front_card() {
        let mut deck = Deck::full();
        let front = deck.cards()[0];
        let second = deck.cards()[1];
        assert_eq!(deck.draw().unwrap(), front);
        assert_eq!(deck.cards()[0], second);
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn draw_on_empty_deck_fails() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Err(DomainError::EmptyDeck));
    }

    #[test]
    fn shuffle_is_deterministic_for_equal_seeds() {
        let mut a = Deck::full();
        let mut b = Deck::full();
        a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.cards(), b.cards());

        let mut c = Deck::full();
        c.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
        assert_ne!(a.cards(), c.cards());
    }

    #[test]
    fn shuffle_preserves_the_card_set() {
        let mut deck = Deck::full();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(distinct.len(), 52);
    }
}
