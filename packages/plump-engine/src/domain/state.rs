//! Phase and turn-order primitives shared across the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seat index into the engine's seating order.
pub type PlayerId = usize;

/// The two sub-stages of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Players place bids in turn order.
    Bid,
    /// Players register plays in turn order.
    Play,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Bid => write!(f, "BID"),
            Phase::Play => write!(f, "PLAY"),
        }
    }
}

/// An action submitted by a player. The payload travels with the kind so a
/// bid can never be read as a play.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayerAction {
    Bid(u8),
    /// Registers a play and passes the turn. Trick resolution is a future
    /// extension point; no card payload is consumed yet.
    Play,
}

impl PlayerAction {
    pub fn phase(&self) -> Phase {
        match self {
            PlayerAction::Bid(_) => Phase::Bid,
            PlayerAction::Play => Phase::Play,
        }
    }
}

/// What an accepted action did to the round, for callers that drive the
/// game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ActionOutcome {
    /// Phase in effect after the action.
    pub phase: Phase,
    /// True when the play sub-phase wrapped around: the round is over and
    /// the next `deal` starts the next one.
    pub round_complete: bool,
}

/// Observable game progression state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data")]
pub enum GameStatus {
    /// No cards are out: the round (or game) is not in progress.
    Idle { round: usize },
    /// A round is underway.
    InProgress {
        round: usize,
        phase: Phase,
        to_act: PlayerId,
    },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Idle { round } => write!(f, "idle (round {round})"),
            GameStatus::InProgress {
                round,
                phase,
                to_act,
            } => {
                write!(f, "round {round}, {phase}, player {to_act} to act")
            }
        }
    }
}

/// Next seat clockwise, wrapping over the seating order.
#[inline]
pub fn next_seat(seat: PlayerId, player_count: usize) -> PlayerId {
    (seat + 1) % player_count
}

/// Seats in acting order for a round led by `first`.
pub fn seating_from(first: PlayerId, player_count: usize) -> impl Iterator<Item = PlayerId> {
    (0..player_count).map(move |offset| (first + offset) % player_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_seat_wraps() {
        assert_eq!(next_seat(0, 4), 1);
        assert_eq!(next_seat(3, 4), 0);
        assert_eq!(next_seat(1, 2), 0);
    }

    #[test]
    fn seating_rotates_from_first() {
        let order: Vec<_> = seating_from(2, 4).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
        let order: Vec<_> = seating_from(0, 3).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn status_serde_is_adjacently_tagged() {
        let s = serde_json::to_string(&GameStatus::InProgress {
            round: 1,
            phase: Phase::Bid,
            to_act: 2,
        })
        .unwrap();
        assert_eq!(
            s,
            r#"{"state":"InProgress","data":{"round":1,"phase":"BID","to_act":2}}"#
        );
        let idle = serde_json::to_string(&GameStatus::Idle { round: 0 }).unwrap();
        assert_eq!(idle, r#"{"state":"Idle","data":{"round":0}}"#);
    }
}
