//! Hand classification: which combination, if any, a raw card selection forms.

use serde::{Deserialize, Serialize};

use super::cards_types::{rank_value, Card, Rank};

/// Closed set of legal combinations. A selection maps to at most one kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandKind {
    Single,
    Pair,
    Triple,
    /// One Five, one Ten, one King (any suits).
    Wushik,
    /// At least five consecutive suited ranks, no jokers, no wrap.
    Straight,
    /// At least three consecutive same-rank pairs.
    TripleDouble,
    /// Four or more cards of one rank; jokers never bomb.
    Bomb,
}

impl HandKind {
    /// Bombs and wushiks beat any non-power hand regardless of kind.
    pub fn is_power(self) -> bool {
        matches!(self, HandKind::Bomb | HandKind::Wushik)
    }
}

/// Classify an unordered selection of cards. Returns `None` for anything
/// that matches no kind; there is no partial credit.
pub fn classify_hand(cards: &[Card]) -> Option<HandKind> {
    match cards.len() {
        0 => None,
        1 => Some(HandKind::Single),
        2 => same_suited_rank(cards).map(|_| HandKind::Pair),
        3 => {
            if same_suited_rank(cards).is_some() {
                Some(HandKind::Triple)
            } else if is_wushik(cards) {
                Some(HandKind::Wushik)
            } else {
                None
            }
        }
        n => {
            if same_suited_rank(cards).is_some() {
                Some(HandKind::Bomb)
            } else if n >= 5 && is_straight(cards) {
                Some(HandKind::Straight)
            } else if n >= 6 && n % 2 == 0 && is_triple_double(cards) {
                Some(HandKind::TripleDouble)
            } else {
                None
            }
        }
    }
}

/// The shared rank if every card is suited and of one rank. Jokers never
/// rank-match anything, including each other.
fn same_suited_rank(cards: &[Card]) -> Option<Rank> {
    let first = cards.first()?.face.rank()?;
    for card in &cards[1..] {
        if card.face.rank() != Some(first) {
            return None;
        }
    }
    Some(first)
}

fn is_wushik(cards: &[Card]) -> bool {
    let mut ranks: Vec<Rank> = Vec::with_capacity(3);
    for card in cards {
        match card.face.rank() {
            Some(r) => ranks.push(r),
            None => return false,
        }
    }
    ranks.sort();
    ranks == [Rank::Five, Rank::Ten, Rank::King]
}

fn is_straight(cards: &[Card]) -> bool {
    if cards.iter().any(|c| c.is_joker()) {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank_value()).collect();
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

fn is_triple_double(cards: &[Card]) -> bool {
    if cards.iter().any(|c| c.is_joker()) {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank_value()).collect();
    values.sort_unstable();
    let pairs: Vec<u8> = values.chunks(2).map(|p| p[0]).collect();
    for (chunk, &pair_value) in values.chunks(2).zip(&pairs) {
        if chunk.len() != 2 || chunk[1] != pair_value {
            return false;
        }
    }
    pairs.len() >= 3 && pairs.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Highest rank value within a hand; the coarse comparator key for
/// like-for-like hands.
pub fn max_rank_value(cards: &[Card]) -> u8 {
    cards.iter().map(|c| rank_value(c.face)).max().unwrap_or(0)
}
