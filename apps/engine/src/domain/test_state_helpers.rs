//! Shared constructors for reducer tests.

use std::collections::BTreeSet;

use super::fixtures::CardFixtures;
use super::state::{GameState, Phase, Player, PlayerId};
use crate::config::GameConfig;
use crate::domain::cards_types::CardId;

/// Build a mid-round Playing state with the given hands. Card ids are kept
/// unique across seats by spacing each seat's id range.
pub fn playing_state(hands: &[&[&str]]) -> GameState {
    let config = GameConfig::default();
    let mut state = GameState::new("test-game", &config);
    for (seat, tokens) in hands.iter().enumerate() {
        let mut player = Player::new(seat as PlayerId, format!("p{seat}"));
        player.hand = CardFixtures::parse_hardcoded_from(seat as u16 * 100, tokens);
        state.players.push(player);
    }
    state.phase = Phase::Playing;
    state.round_no = 1;
    state
}

/// Ids of the cards in `seat`'s hand matching the given face tokens, each
/// physical card used at most once.
pub fn ids_for(state: &GameState, seat: PlayerId, tokens: &[&str]) -> Vec<CardId> {
    let hand = &state.players[seat as usize].hand;
    let mut used: BTreeSet<CardId> = BTreeSet::new();
    tokens
        .iter()
        .map(|t| {
            let face = t.parse().expect("hardcoded valid card token");
            let card = hand
                .iter()
                .find(|c| c.face == face && !used.contains(&c.id))
                .expect("token should be in hand");
            used.insert(card.id);
            card.id
        })
        .collect()
}
