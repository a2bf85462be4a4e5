//! Core card-related types: Card, Rank, Suit

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// All suits in deck-construction order.
pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

/// All ranks from lowest to highest (ace high).
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl Default for Card {
    /// The first suit and rank of their domains (two of clubs).
    fn default() -> Self {
        Self {
            suit: Suit::Clubs,
            rank: Rank::Two,
        }
    }
}

// Note: Ord/Eq on Card is only for stable sorting: suit order C<D<S<H then rank order.
// Do not use for trick resolution or comparisons involving a lead suit.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for Card {
    /// Compact two-character token form, e.g. `AS`, `TD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_equality_is_by_value() {
        let a = Card::new(Suit::Hearts, Rank::Queen);
        let b = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(a, b);
        assert_ne!(a, Card::new(Suit::Hearts, Rank::King));
        assert_ne!(a, Card::new(Suit::Spades, Rank::Queen));
    }

    #[test]
    fn default_card_is_first_of_each_domain() {
        assert_eq!(Card::default(), Card::new(Suit::Clubs, Rank::Two));
    }

    #[test]
    fn display_uses_compact_tokens() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "AS");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "TD");
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "2C");
    }

    #[test]
    fn sort_order_is_suit_major() {
        let mut cards = vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Three),
        ];
        cards.sort();
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Clubs, Rank::Three),
                Card::new(Suit::Clubs, Rank::Ace),
                Card::new(Suit::Hearts, Rank::Two),
            ]
        );
    }
}
