//! The game engine state machine: roster, dealing, bidding, turn rotation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::deck::Deck;
use super::player::Player;
use super::rules::{self, clamped_max_cards};
use super::state::{
    next_seat, seating_from, ActionOutcome, GameStatus, Phase, PlayerAction, PlayerId,
};
use crate::errors::DomainError;

/// Owns the deck and the seated players and enforces the game's sequencing.
///
/// Drive it in this order: seat players with [`add_player`], optionally cap
/// the opening hand size with [`set_max_cards`], then alternate [`deal`] and
/// per-player [`action`] calls. The engine never advances a round on its
/// own; when the play sub-phase wraps around, the caller deals again.
///
/// [`add_player`]: GameEngine::add_player
/// [`set_max_cards`]: GameEngine::set_max_cards
/// [`deal`]: GameEngine::deal
/// [`action`]: GameEngine::action
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    deck: Deck,
    rng: ChaCha8Rng,
    started: bool,
    /// Most recently requested cap, kept so seating more players re-clamps
    /// against the caller's intent rather than a previously clamped value.
    requested_cards: usize,
    max_cards: usize,
    current_round: usize,
    phase: Phase,
    current_player: PlayerId,
    first_player: PlayerId,
    /// Cards per hand this round; 0 means no round is in progress.
    cards_left: usize,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// An engine whose shuffles are fully determined by `seed` until a
    /// `deal` reseeds it.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            players: Vec::new(),
            deck: Deck::new(),
            rng,
            started: false,
            requested_cards: rules::UNBOUNDED_CARDS,
            max_cards: 1,
            current_round: 0,
            phase: Phase::Bid,
            current_player: 0,
            first_player: 0,
            cards_left: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Hand size of the opening round.
    pub fn max_cards(&self) -> usize {
        self.max_cards
    }

    /// Length of the shrink schedule; equals [`max_cards`](Self::max_cards).
    pub fn number_of_rounds(&self) -> usize {
        self.max_cards
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    pub fn cards_left(&self) -> usize {
        self.cards_left
    }

    /// Seat a new player. Rejected once the game has started or when the
    /// name is already taken; on success the hand-size cap is re-clamped
    /// for the new seat count.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        if self.started {
            return Err(DomainError::RosterClosed(format!(
                "cannot seat {name} after the game has started"
            )));
        }
        if self.players.iter().any(|p| p.name() == name) {
            return Err(DomainError::DuplicatePlayer(format!(
                "{name} is already seated"
            )));
        }
        self.players.push(Player::new(name));
        self.max_cards = clamped_max_cards(self.requested_cards, self.players.len());
        let seat = self.players.len() - 1;
        debug!(name, seat, max_cards = self.max_cards, "player seated");
        Ok(seat)
    }

    /// Request an opening hand-size cap. The stored value is clamped to the
    /// deck split (floored at one); `Ok(true)` means the request was stored
    /// unclamped, `Ok(false)` that clamping kicked in.
    pub fn set_max_cards(&mut self, n: usize) -> Result<bool, DomainError> {
        if self.started {
            return Err(DomainError::RosterClosed(
                "cannot change the hand-size cap after the game has started".into(),
            ));
        }
        if self.players.is_empty() {
            return Err(DomainError::EmptyRoster(
                "seat players before setting the hand-size cap".into(),
            ));
        }
        self.requested_cards = n;
        self.max_cards = clamped_max_cards(n, self.players.len());
        debug!(requested = n, max_cards = self.max_cards, "hand-size cap set");
        Ok(self.max_cards == n)
    }

    /// Hand size the schedule assigns to a 0-based round index.
    pub fn hand_size_for_round(&self, round: usize) -> Result<usize, DomainError> {
        rules::hand_size_for_round(self.max_cards, self.players.len(), round).ok_or_else(|| {
            DomainError::InvalidRound(format!("round {round} is beyond the schedule"))
        })
    }

    /// Deal the next round: rebuild and shuffle the full deck, clear every
    /// hand, and distribute the round's cards one at a time starting at the
    /// round's first player. The first deal starts the game; every later
    /// deal advances the round and rotates the first player. Passing a seed
    /// reseeds the engine's RNG for a reproducible permutation.
    ///
    /// Returns the number of cards dealt to each player.
    pub fn deal(&mut self, seed: Option<u64>) -> Result<usize, DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::EmptyRoster(
                "cannot deal with no players seated".into(),
            ));
        }
        let (round, first) = if self.started {
            (
                self.current_round + 1,
                next_seat(self.first_player, self.players.len()),
            )
        } else {
            (self.current_round, self.first_player)
        };
        // Validate the schedule before touching any state.
        let hand_size = rules::hand_size_for_round(self.max_cards, self.players.len(), round)
            .ok_or_else(|| {
                DomainError::InvalidRound(format!("round {round} is beyond the schedule"))
            })?;

        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.deck.fill();
        self.deck.shuffle(&mut self.rng);
        for player in &mut self.players {
            player.clear_hand();
        }
        self.started = true;
        self.current_round = round;
        self.first_player = first;
        // Round-robin, one card at a time, in acting order.
        for _ in 0..hand_size {
            for seat in seating_from(first, self.players.len()) {
                let card = self.deck.draw()?;
                self.players[seat].deal(card);
            }
        }
        self.cards_left = hand_size;
        self.phase = Phase::Bid;
        self.current_player = first;
        info!(round, hand_size, first_player = first, "round dealt");
        Ok(hand_size)
    }

    /// Submit an action for a seat. Rejections leave the game untouched;
    /// an accepted action advances the turn and, on wrap-around, either
    /// moves bidding into play or marks the round complete.
    pub fn action(
        &mut self,
        player: PlayerId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, DomainError> {
        let result = self.apply_action(player, action);
        match &result {
            Ok(outcome) => debug!(
                player,
                ?action,
                round_complete = outcome.round_complete,
                "action accepted"
            ),
            Err(reason) => debug!(player, ?action, %reason, "action rejected"),
        }
        result
    }

    fn apply_action(
        &mut self,
        player: PlayerId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, DomainError> {
        if self.cards_left == 0 {
            return Err(DomainError::PhaseMismatch("no round is in progress".into()));
        }
        if player != self.current_player {
            return Err(DomainError::OutOfTurn(format!(
                "player {player} is not the current player"
            )));
        }
        if action.phase() != self.phase {
            return Err(DomainError::PhaseMismatch(format!(
                "{} not allowed during {}",
                action.phase(),
                self.phase
            )));
        }

        if let PlayerAction::Bid(bid) = action {
            if usize::from(bid) > self.cards_left {
                return Err(DomainError::BidTooHigh(format!(
                    "bid {bid} is more than the {} cards in play",
                    self.cards_left
                )));
            }
            // The restriction binds only the round's final bidder.
            if next_seat(player, self.players.len()) == self.first_player {
                let total: usize = self
                    .current_bids()?
                    .iter()
                    .map(|&b| usize::from(b))
                    .sum::<usize>()
                    + usize::from(bid);
                if total == self.cards_left {
                    return Err(DomainError::RestrictedBid(format!(
                        "bid {bid} would make the round total {total} equal the cards dealt"
                    )));
                }
            }
            self.players[player].record_bid(bid);
        }

        self.current_player = next_seat(self.current_player, self.players.len());
        let mut outcome = ActionOutcome {
            phase: self.phase,
            round_complete: false,
        };
        if self.current_player == self.first_player {
            match self.phase {
                Phase::Bid => {
                    self.phase = Phase::Play;
                    outcome.phase = Phase::Play;
                    debug!(round = self.current_round, "bidding complete");
                }
                Phase::Play => {
                    outcome.round_complete = true;
                    debug!(round = self.current_round, "round complete");
                }
            }
        }
        Ok(outcome)
    }

    /// Bids already placed this round, in acting order. While bidding is
    /// open the list stops before the seat whose turn it is; once play has
    /// begun it covers every seat.
    pub fn current_bids(&self) -> Result<Vec<u8>, DomainError> {
        let mut bids = Vec::new();
        for seat in seating_from(self.first_player, self.players.len()) {
            if self.phase == Phase::Bid && seat == self.current_player {
                break;
            }
            bids.push(self.players[seat].last_bid()?);
        }
        Ok(bids)
    }

    /// Observable progression state.
    pub fn status(&self) -> GameStatus {
        if self.cards_left == 0 {
            GameStatus::Idle {
                round: self.current_round,
            }
        } else {
            GameStatus::InProgress {
                round: self.current_round,
                phase: self.phase,
                to_act: self.current_player,
            }
        }
    }

    /// Resolve the completed round for every seat, in seating order. The
    /// engine does not decide outcomes itself (trick resolution lives with
    /// the caller); it only records them atomically.
    pub fn record_outcomes(&mut self, met: &[bool]) -> Result<(), DomainError> {
        if met.len() != self.players.len() {
            return Err(DomainError::other(format!(
                "expected {} outcomes, got {}",
                self.players.len(),
                met.len()
            )));
        }
        // Check every seat first so a failure cannot apply partially.
        if let Some(p) = self.players.iter().find(|p| !p.has_open_round()) {
            return Err(DomainError::EmptyHistory(format!(
                "{} has no unresolved round",
                p.name()
            )));
        }
        for (player, &m) in self.players.iter_mut().zip(met) {
            player.record_outcome(m)?;
        }
        debug!(round = self.current_round, "round outcomes recorded");
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
