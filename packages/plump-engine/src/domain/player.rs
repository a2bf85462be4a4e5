//! Per-participant state: hand, bid history, and round outcomes.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::rules::round_score;
use crate::errors::DomainError;

/// One round's facts for a player, kept together so the bid, its outcome,
/// and the derived score can never drift out of alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The bid placed during the round's bidding phase.
    pub bid: u8,
    /// Whether the bid was met; `None` until the round is resolved.
    pub met: Option<bool>,
}

impl RoundRecord {
    /// Derived score for this record; unresolved rounds score nothing.
    pub fn score(&self) -> u32 {
        match self.met {
            Some(met) => round_score(self.bid, met),
            None => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    rounds: Vec<RoundRecord>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            rounds: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Bid/outcome history, one record per round the player has bid in.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Append a card to the hand. The engine bounds hand size via the deal;
    /// the player itself enforces no cap.
    pub fn deal(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Open a new round record with the placed bid.
    pub fn record_bid(&mut self, bid: u8) {
        self.rounds.push(RoundRecord { bid, met: None });
    }

    /// The most recently placed bid.
    pub fn last_bid(&self) -> Result<u8, DomainError> {
        self.rounds
            .last()
            .map(|r| r.bid)
            .ok_or_else(|| DomainError::EmptyHistory(format!("{} has not bid yet", self.name)))
    }

    /// Resolve the oldest open round record with its outcome.
    pub fn record_outcome(&mut self, met: bool) -> Result<(), DomainError> {
        let open = self
            .rounds
            .iter_mut()
            .find(|r| r.met.is_none())
            .ok_or_else(|| {
                DomainError::EmptyHistory(format!("{} has no unresolved round", self.name))
            })?;
        open.met = Some(met);
        Ok(())
    }

    /// Whether an unresolved round record exists.
    pub fn has_open_round(&self) -> bool {
        self.rounds.iter().any(|r| r.met.is_none())
    }

    /// Per-round derived scores, one entry per recorded round.
    pub fn round_scores(&self) -> Vec<u32> {
        self.rounds.iter().map(RoundRecord::score).collect()
    }

    pub fn total_score(&self) -> u32 {
        self.rounds.iter().map(RoundRecord::score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::cards_types::{Rank, Suit};
    use super::*;

    #[test]
    fn dealt_cards_accumulate_until_cleared() {
        let mut p = Player::new("Alice");
        p.deal(Card::new(Suit::Clubs, Rank::Two));
        p.deal(Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(p.hand().len(), 2);
        p.clear_hand();
        assert!(p.hand().is_empty());
    }

    #[test]
    fn last_bid_requires_history() {
        let mut p = Player::new("Alice");
        assert!(matches!(p.last_bid(), Err(DomainError::EmptyHistory(_))));
        p.record_bid(3);
        assert_eq!(p.last_bid().unwrap(), 3);
        p.record_bid(0);
        assert_eq!(p.last_bid().unwrap(), 0);
    }

    #[test]
    fn outcomes_resolve_rounds_in_order() {
        let mut p = Player::new("Bob");
        p.record_bid(2);
        p.record_bid(4);
        p.record_outcome(true).unwrap();
        p.record_outcome(false).unwrap();
        assert_eq!(
            p.rounds(),
            &[
                RoundRecord { bid: 2, met: Some(true) },
                RoundRecord { bid: 4, met: Some(false) },
            ]
        );
        // Nothing left to resolve.
        assert!(matches!(
            p.record_outcome(true),
            Err(DomainError::EmptyHistory(_))
        ));
    }

    #[test]
    fn scores_follow_the_bid_table() {
        let mut p = Player::new("Carol");
        for (bid, met) in [(0, true), (3, true), (10, true), (5, false)] {
            p.record_bid(bid);
            p.record_outcome(met).unwrap();
        }
        p.record_bid(1); // still unresolved
        assert_eq!(p.round_scores(), vec![5, 13, 110, 0, 0]);
        assert_eq!(p.total_score(), 128);
    }
}
