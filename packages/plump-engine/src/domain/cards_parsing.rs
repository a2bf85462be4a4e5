//! Card parsing from string representations (e.g., "AS", "2C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::other(format!("parse card: {s:?}")));
        };
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(DomainError::other(format!("parse card rank: {s:?}"))),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            _ => return Err(DomainError::other(format!("parse card suit: {s:?}"))),
        };
        Ok(Card { suit, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_tokens() {
        assert_eq!(
            "AS".parse::<Card>().unwrap(),
            Card::new(Suit::Spades, Rank::Ace)
        );
        assert_eq!(
            "TD".parse::<Card>().unwrap(),
            Card::new(Suit::Diamonds, Rank::Ten)
        );
        assert_eq!(
            "9C".parse::<Card>().unwrap(),
            Card::new(Suit::Clubs, Rank::Nine)
        );
        assert_eq!(
            "2H".parse::<Card>().unwrap(),
            Card::new(Suit::Hearts, Rank::Two)
        );
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["1H", "11S", "Ah", "ZZ", "", "10H", "A"] {
            assert!(tok.parse::<Card>().is_err(), "{tok:?} should not parse");
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for suit in super::super::cards_types::ALL_SUITS {
            let card = Card::new(suit, Rank::Queen);
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }
}
