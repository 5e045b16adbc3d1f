//! The beat ordering between plays.
//!
//! `hand_beats` is asymmetric: it answers whether the new play may replace
//! the current one on the table. Ties never replace the table.

use super::cards_types::{Card, Suit};
use super::classify::{max_rank_value, HandKind};

/// Whether `new` legally beats `current` on the table.
pub fn hand_beats(
    new_kind: HandKind,
    new_cards: &[Card],
    cur_kind: HandKind,
    cur_cards: &[Card],
) -> bool {
    match (new_kind.is_power(), cur_kind.is_power()) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => power_beats(new_kind, new_cards, cur_kind, cur_cards),
        (false, false) => {
            new_kind == cur_kind
                && new_cards.len() == cur_cards.len()
                && max_rank_value(new_cards) > max_rank_value(cur_cards)
        }
    }
}

fn power_beats(
    new_kind: HandKind,
    new_cards: &[Card],
    cur_kind: HandKind,
    cur_cards: &[Card],
) -> bool {
    match (new_kind, cur_kind) {
        // A bomb, even a minimal four-of-a-kind, outranks any wushik.
        (HandKind::Bomb, HandKind::Wushik) => true,
        (HandKind::Wushik, HandKind::Bomb) => false,
        (HandKind::Bomb, HandKind::Bomb) => {
            if new_cards.len() != cur_cards.len() {
                new_cards.len() > cur_cards.len()
            } else {
                max_rank_value(new_cards) > max_rank_value(cur_cards)
            }
        }
        (HandKind::Wushik, HandKind::Wushik) => wushik_beats(new_cards, cur_cards),
        _ => false,
    }
}

/// Flush wushiks outrank mixed ones; two flushes compare by suit precedence.
/// Two mixed wushiks never beat each other.
fn wushik_beats(new_cards: &[Card], cur_cards: &[Card]) -> bool {
    match (flush_suit(new_cards), flush_suit(cur_cards)) {
        (Some(_), None) => true,
        (Some(new_suit), Some(cur_suit)) => new_suit > cur_suit,
        (None, _) => false,
    }
}

/// The shared suit if every card in the hand carries the same one.
fn flush_suit(cards: &[Card]) -> Option<Suit> {
    let first = cards.first()?.face.suit()?;
    for card in &cards[1..] {
        if card.face.suit() != Some(first) {
            return None;
        }
    }
    Some(first)
}
