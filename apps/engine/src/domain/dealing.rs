//! Deck construction, shuffling, the opening deal, and roster setup.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use super::cards_types::{display_key, Card, CardFace, CardId, JokerKind, Rank, Suit, RANKS, SUITS};
use super::state::{AiDifficulty, GameState, Phase, Player, PlayerId};
use crate::errors::domain::{DomainError, RejectKind};

/// Cards per deck: 52 suited plus the two jokers.
pub const DECK_SIZE: usize = 54;

/// Minimum roster for a round to produce a 1st, a 2nd, and a last place.
pub const MIN_PLAYERS: usize = 3;

/// Decks needed so every seat gets a playable hand: one deck per four seats.
pub fn decks_for_players(player_count: usize) -> usize {
    player_count.div_ceil(4).max(1)
}

/// Build `num_decks` decks with deck-scoped unique ids and return them as one
/// uniformly shuffled sequence (Fisher-Yates via the injected rng).
pub fn build_deck(num_decks: usize, rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = Vec::with_capacity(num_decks * DECK_SIZE);
    for deck_ix in 0..num_decks {
        let base = (deck_ix * DECK_SIZE) as u16;
        let mut offset = 0u16;
        for suit in SUITS {
            for rank in RANKS {
                deck.push(Card {
                    id: CardId(base + offset),
                    face: CardFace::Suited { suit, rank },
                });
                offset += 1;
            }
        }
        deck.push(Card {
            id: CardId(base + offset),
            face: CardFace::Joker(JokerKind::Small),
        });
        deck.push(Card {
            id: CardId(base + offset + 1),
            face: CardFace::Joker(JokerKind::Big),
        });
    }
    deck.shuffle(rng);
    deck
}

/// Outcome of an opening deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealResult {
    /// One hand per seat, display-sorted.
    pub hands: Vec<Vec<Card>>,
    /// Seat holding the three of spades; leads the first trick.
    pub first_seat: PlayerId,
}

/// Deal for `player_count` seats: ceil(n/4) decks, round-robin, no discards.
/// Hand sizes may differ by one when the deck does not divide evenly.
pub fn deal_hands(player_count: usize, rng: &mut impl Rng) -> Result<DealResult, DomainError> {
    if player_count == 0 {
        return Err(DomainError::invariant("cannot deal to zero players"));
    }
    let num_decks = decks_for_players(player_count);
    let deck = build_deck(num_decks, rng);

    let mut hands: Vec<Vec<Card>> = vec![Vec::new(); player_count];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    for hand in &mut hands {
        sort_for_display(hand);
    }

    let first_seat = find_three_of_spades(&hands).unwrap_or_else(|| {
        // Should be unreachable with a standard deck; tolerated loudly.
        warn!("no three of spades dealt; defaulting first seat to 0");
        0
    });
    Ok(DealResult { hands, first_seat })
}

fn find_three_of_spades(hands: &[Vec<Card>]) -> Option<PlayerId> {
    let target = CardFace::Suited {
        suit: Suit::Spades,
        rank: Rank::Three,
    };
    hands
        .iter()
        .position(|hand| hand.iter().any(|c| c.face == target))
        .map(|seat| seat as PlayerId)
}

/// Sort a hand by suit then rank, jokers last. Display stability only.
pub fn sort_for_display(hand: &mut [Card]) {
    hand.sort_by_key(|c| display_key(c.face));
}

/// Add a human player to a waiting game. Returns the new state and the seat.
pub fn add_player(
    state: &GameState,
    name: impl Into<String>,
) -> Result<(GameState, PlayerId), DomainError> {
    state.require_phase(Phase::Waiting, "add_player")?;
    let mut next = state.clone();
    let seat = next.players.len() as PlayerId;
    next.players.push(Player::new(seat, name));
    Ok((next, seat))
}

/// Add an AI seat to a waiting game.
pub fn add_ai_player(
    state: &GameState,
    name: impl Into<String>,
    difficulty: AiDifficulty,
) -> Result<(GameState, PlayerId), DomainError> {
    state.require_phase(Phase::Waiting, "add_ai_player")?;
    let mut next = state.clone();
    let seat = next.players.len() as PlayerId;
    next.players.push(Player::new_ai(seat, name, difficulty));
    Ok((next, seat))
}

/// Deal the first round and move the game into play.
pub fn start_game(state: &GameState, rng: &mut impl Rng) -> Result<GameState, DomainError> {
    state.require_phase(Phase::Waiting, "start_game")?;
    if state.players.len() < MIN_PLAYERS {
        return Err(DomainError::rejected(
            RejectKind::RosterTooSmall,
            format!("need at least {MIN_PLAYERS} players, have {}", state.players.len()),
        ));
    }

    let mut next = state.clone();
    let deal = deal_hands(next.players.len(), rng)?;
    for (player, hand) in next.players.iter_mut().zip(deal.hands) {
        player.hand = hand;
    }
    next.turn = deal.first_seat;
    next.round_no = 1;
    next.phase = Phase::Playing;
    info!(
        game_id = %next.game_id,
        players = next.players.len(),
        first_seat = deal.first_seat,
        "game started"
    );
    Ok(next)
}
