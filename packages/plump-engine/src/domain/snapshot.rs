//! Public snapshot of a game for rendering, without exposing engine internals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::engine::GameEngine;
use super::state::GameStatus;

/// Public info about a single seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub name: String,
    pub hand: Vec<Card>,
    pub total_score: u32,
}

/// Top-level snapshot: roster, schedule length, progression, current bids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerPublic>,
    pub number_of_rounds: usize,
    pub status: GameStatus,
    pub bids: Vec<u8>,
}

/// Produce a snapshot of the current game state. Never fails; inconsistent
/// bid history degrades to an empty bid list.
pub fn snapshot(engine: &GameEngine) -> GameSnapshot {
    GameSnapshot {
        players: engine
            .players()
            .iter()
            .map(|p| PlayerPublic {
                name: p.name().to_owned(),
                hand: p.hand().to_vec(),
                total_score: p.total_score(),
            })
            .collect(),
        number_of_rounds: engine.number_of_rounds(),
        status: engine.status(),
        bids: engine.current_bids().unwrap_or_default(),
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game has {} players:", self.players.len())?;
        for p in &self.players {
            write!(f, "Player {} holds {} cards: [", p.name, p.hand.len())?;
            for (i, card) in p.hand.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{card}")?;
            }
            writeln!(f, "] (score {})", p.total_score)?;
        }
        writeln!(f, "Rounds: {}", self.number_of_rounds)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Bids: {:?}", self.bids)
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::PlayerAction;
    use super::*;

    fn two_player_game() -> GameEngine {
        let mut game = GameEngine::new();
        game.add_player("Alice").unwrap();
        game.add_player("Bob").unwrap();
        game.set_max_cards(5).unwrap();
        game.deal(Some(1)).unwrap();
        game
    }

    #[test]
    fn snapshot_reflects_roster_and_bids() {
        let mut game = two_player_game();
        game.action(0, PlayerAction::Bid(3)).unwrap();

        let snap = snapshot(&game);
        assert_eq!(snap.players.len(), 2);
        assert_eq!(snap.players[0].name, "Alice");
        assert_eq!(snap.players[0].hand.len(), 5);
        assert_eq!(snap.number_of_rounds, 5);
        assert_eq!(snap.bids, vec![3]);
        assert!(matches!(snap.status, GameStatus::InProgress { to_act: 1, .. }));
    }

    #[test]
    fn snapshot_serializes_to_json_and_back() {
        let game = two_player_game();
        let snap = snapshot(&game);
        let json = serde_json::to_string(&snap).unwrap();
        let decoded: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snap);
    }

    #[test]
    fn display_lists_each_player_line() {
        let game = two_player_game();
        let text = snapshot(&game).to_string();
        assert!(text.starts_with("Game has 2 players:"));
        assert!(text.contains("Player Alice holds 5 cards:"));
        assert!(text.contains("Player Bob holds 5 cards:"));
        assert!(text.contains("Rounds: 5"));
        assert!(text.contains("Bids: []"));
    }
}
