//! Centralized helper for parsing hardcoded card tokens in fixtures and
//! demo data.

use super::cards_types::{Card, CardId};

pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded face tokens (e.g., ["5C", "TD", "BJ"]) into cards with
    /// sequential ids starting at `base_id`.
    ///
    /// Intended only for tokens known valid at authoring time; panics on a
    /// bad token rather than returning a Result.
    pub fn parse_hardcoded_from(base_id: u16, tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, s)| Card {
                id: CardId(base_id + i as u16),
                #[allow(clippy::expect_used)]
                face: s.parse().expect("hardcoded valid card token"),
            })
            .collect()
    }

    /// Parse hardcoded face tokens with ids starting at 0.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        Self::parse_hardcoded_from(0, tokens)
    }
}
