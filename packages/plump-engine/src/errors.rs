//! Domain-level error type for the Plump engine.
//!
//! Every variant is a recoverable, caller-facing rejection: the engine
//! validated a request, refused it, and changed nothing. The carried string
//! is the human-readable reason; it is meant for logs and messages, not for
//! matching. `EmptyHistory` and `EmptyDeck` indicate caller misuse (a query
//! before its precondition holds) rather than a game-rule violation, but
//! they are still surfaced as errors, never as panics.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Roster or hand-size cap mutation after the first deal.
    #[error("roster is closed: {0}")]
    RosterClosed(String),
    /// Seating a player under a name that is already taken.
    #[error("duplicate player: {0}")]
    DuplicatePlayer(String),
    /// An operation that needs seated players found none.
    #[error("empty roster: {0}")]
    EmptyRoster(String),
    /// A player acted when it was not their turn.
    #[error("out of turn: {0}")]
    OutOfTurn(String),
    /// The submitted action does not match the current phase.
    #[error("action not allowed: {0}")]
    PhaseMismatch(String),
    /// A bid exceeding the number of cards in the round.
    #[error("bid over limit: {0}")]
    BidTooHigh(String),
    /// The final bidder tried to make the round's bids sum to the cards dealt.
    #[error("restricted bid: {0}")]
    RestrictedBid(String),
    /// A round index beyond the shrink-then-hold schedule.
    #[error("invalid round: {0}")]
    InvalidRound(String),
    /// A history query before any entry exists.
    #[error("empty history: {0}")]
    EmptyHistory(String),
    /// A draw from an exhausted deck.
    #[error("empty deck")]
    EmptyDeck,
    /// Anything that does not fit the variants above.
    #[error("{0}")]
    Other(String),
}

impl DomainError {
    pub fn other(detail: impl Into<String>) -> Self {
        Self::Other(detail.into())
    }
}
