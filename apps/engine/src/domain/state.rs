//! Game state aggregate and seat helpers.
//!
//! `GameState` is an explicit snapshot mutated only through the pure reducers
//! in `turns`, `scoring`, and `dealing`. The embedding application persists
//! and fans out whole snapshots; the engine never shares mutable state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, CardId};
use super::classify::HandKind;
use super::compare::hand_beats;
use crate::config::GameConfig;
use crate::errors::domain::{DomainError, RejectKind};

/// Seat index into `GameState::players`; turn order is fixed at game start.
pub type PlayerId = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Game created; the only phase permitting roster changes.
    Waiting,
    /// Tricks are being played.
    Playing,
    /// One player left holding cards; hands frozen for the reveal.
    RoundReveal,
    /// Standings checkpoint between rounds.
    RoundEnd,
    /// Terminal; a player reached the target score.
    GameOver,
}

/// AI difficulty tiers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiDifficulty {
    Easy,
    Medium,
    Hard,
}

/// The kind-tagged combination currently on the table, and who played it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedHand {
    pub kind: HandKind,
    pub cards: Vec<Card>,
    pub owner: PlayerId,
}

impl PlayedHand {
    pub fn beats(&self, current: &PlayedHand) -> bool {
        hand_beats(self.kind, &self.cards, current.kind, &current.cards)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    /// Trick points collected this round; redistributed at round end.
    pub temp_points: i32,
    /// Running total across the whole game.
    pub total_points: i32,
    /// 1-based finishing position within the round, set once when the hand
    /// empties and cleared at the round boundary.
    pub finish_order: Option<u8>,
    /// AI seat marker with its difficulty tier; `None` for humans.
    pub ai: Option<AiDifficulty>,
    /// Rounds this player finished first. Display statistic only.
    pub first_place_wins: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            temp_points: 0,
            total_points: 0,
            finish_order: None,
            ai: None,
            first_place_wins: 0,
        }
    }

    pub fn new_ai(id: PlayerId, name: impl Into<String>, difficulty: AiDifficulty) -> Self {
        Self {
            ai: Some(difficulty),
            ..Self::new(id, name)
        }
    }

    pub fn has_finished(&self) -> bool {
        self.finish_order.is_some()
    }

    /// Point total of the cards still held. Used for the last player's
    /// unplayed hand at round end.
    pub fn hand_points(&self) -> i32 {
        self.hand.iter().map(Card::point_value).sum()
    }
}

/// Entire game container, sufficient for every pure transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Replication key; opaque to the engine.
    pub game_id: String,
    /// Roster in seat order.
    pub players: Vec<Player>,
    /// Seat expected to act.
    pub turn: PlayerId,
    /// The active hand on the table, if any.
    pub table: Option<PlayedHand>,
    /// All cards played into the current trick and not yet collected.
    pub trick_pool: Vec<Card>,
    /// Seats that passed since the table hand was played.
    pub passed: BTreeSet<PlayerId>,
    /// 1-based round counter; 0 while waiting.
    pub round_no: u32,
    /// First player to reach this total ends the game.
    pub target_points: i32,
    pub phase: Phase,
    /// Set on transition to GameOver.
    pub winner: Option<PlayerId>,
    /// The round's last-place seat, set during the reveal.
    pub last_place: Option<PlayerId>,
}

impl GameState {
    /// Fresh game in the Waiting phase with an empty roster.
    pub fn new(game_id: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            game_id: game_id.into(),
            players: Vec::new(),
            turn: 0,
            table: None,
            trick_pool: Vec::new(),
            passed: BTreeSet::new(),
            round_no: 0,
            target_points: config.target_points,
            phase: Phase::Waiting,
            winner: None,
            last_place: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.players.get(id as usize).ok_or_else(|| {
            DomainError::rejected(RejectKind::PlayerNotFound, format!("no player with id {id}"))
        })
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, DomainError> {
        self.players.get_mut(id as usize).ok_or_else(|| {
            DomainError::rejected(RejectKind::PlayerNotFound, format!("no player with id {id}"))
        })
    }

    /// Seats still holding a place in the round (not yet finished).
    pub fn active_seats(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !p.has_finished())
            .map(|p| p.id)
            .collect()
    }

    /// Next unfinished seat after `seat`, wrapping around the table.
    pub fn next_active_after(&self, seat: PlayerId) -> Option<PlayerId> {
        let count = self.players.len();
        for step in 1..=count {
            let candidate = ((seat as usize + step) % count) as PlayerId;
            if !self.players[candidate as usize].has_finished() {
                return Some(candidate);
            }
        }
        None
    }

    /// Finishing position for the next player to empty their hand.
    pub fn next_finish_position(&self) -> u8 {
        let finished = self.players.iter().filter(|p| p.has_finished()).count();
        (finished + 1) as u8
    }

    /// Seat that finished at the given 1-based position, if any.
    pub fn seat_with_finish_position(&self, position: u8) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.finish_order == Some(position))
            .map(|p| p.id)
    }

    pub(crate) fn require_phase(&self, expected: Phase, ctx: &'static str) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::rejected(
                RejectKind::PhaseMismatch,
                format!("{ctx} requires {expected:?} phase, state is {:?}", self.phase),
            ));
        }
        Ok(())
    }

    /// Resolve a set of card ids against a player's hand, in submission order.
    pub fn resolve_cards(&self, id: PlayerId, card_ids: &[CardId]) -> Result<Vec<Card>, DomainError> {
        let player = self.player(id)?;
        let mut seen: BTreeSet<CardId> = BTreeSet::new();
        let mut cards = Vec::with_capacity(card_ids.len());
        for &card_id in card_ids {
            if !seen.insert(card_id) {
                return Err(DomainError::rejected(
                    RejectKind::CardNotInHand,
                    format!("card {} selected twice", card_id.0),
                ));
            }
            let card = player.hand.iter().find(|c| c.id == card_id).ok_or_else(|| {
                DomainError::rejected(
                    RejectKind::CardNotInHand,
                    format!("card {} is not in player {id}'s hand", card_id.0),
                )
            })?;
            cards.push(*card);
        }
        Ok(cards)
    }
}
