//! Three-tier heuristic player.
//!
//! The heuristic is a greedy search over legal combinations, not adversarial
//! lookahead; difficulty tiers differ only in which legal move they select
//! and in whether they occasionally hold back.
//!
//! - easy leads its lowest single, beats with the *highest* qualifying
//!   candidate, and always plays when it can.
//! - medium leads the lowest pair if one exists, picks the middle candidate,
//!   and plays with probability 0.7 even when a legal play exists.
//! - hard leads triple > pair > single, picks the *lowest* qualifying
//!   candidate, and withholds high cards from low-value tricks.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_def::{AiError, AiMove, AiPlayer};
use crate::domain::cards_types::{Card, Rank, SUITS};
use crate::domain::classify::{max_rank_value, HandKind};
use crate::domain::compare::hand_beats;
use crate::domain::state::{AiDifficulty, PlayedHand};

pub struct HeuristicPlayer {
    difficulty: AiDifficulty,
    /// Interior mutability: trait methods take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl HeuristicPlayer {
    pub fn new(difficulty: AiDifficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            difficulty,
            rng: Mutex::new(rng),
        }
    }

    pub fn difficulty(&self) -> AiDifficulty {
        self.difficulty
    }

    // ---------- candidate enumeration (pure) ----------

    /// Suited cards grouped by rank value, ascending. Jokers never group.
    fn rank_groups(hand: &[Card]) -> Vec<(u8, Vec<Card>)> {
        let mut groups: Vec<(u8, Vec<Card>)> = Vec::new();
        for card in hand {
            if card.is_joker() {
                continue;
            }
            let value = card.rank_value();
            match groups.iter_mut().find(|(v, _)| *v == value) {
                Some((_, cards)) => cards.push(*card),
                None => groups.push((value, vec![*card])),
            }
        }
        groups.sort_by_key(|(v, _)| *v);
        groups
    }

    fn lowest_single(hand: &[Card]) -> Option<Card> {
        hand.iter().copied().min_by_key(|c| (c.rank_value(), c.id))
    }

    /// Lowest same-rank group of at least `size`, trimmed to exactly `size`.
    fn lowest_group_of(hand: &[Card], size: usize) -> Option<Vec<Card>> {
        Self::rank_groups(hand)
            .into_iter()
            .find(|(_, cards)| cards.len() >= size)
            .map(|(_, cards)| cards[..size].to_vec())
    }

    /// All same-kind candidates that could answer the active hand. Only
    /// singles, pairs, and triples are enumerated; longer shapes are left to
    /// the power-hand fallback.
    fn same_kind_candidates(hand: &[Card], active: &PlayedHand) -> Vec<Vec<Card>> {
        match active.kind {
            HandKind::Single => hand.iter().map(|c| vec![*c]).collect(),
            HandKind::Pair => Self::groups_of(hand, 2),
            HandKind::Triple => Self::groups_of(hand, 3),
            _ => Vec::new(),
        }
    }

    /// One candidate per rank holding at least `size` copies.
    fn groups_of(hand: &[Card], size: usize) -> Vec<Vec<Card>> {
        Self::rank_groups(hand)
            .into_iter()
            .filter(|(_, cards)| cards.len() >= size)
            .map(|(_, cards)| cards[..size].to_vec())
            .collect()
    }

    /// Power hands available in the hand: every bomb, plus a wushik if one
    /// can be assembled.
    fn power_candidates(hand: &[Card]) -> Vec<(HandKind, Vec<Card>)> {
        let mut candidates: Vec<(HandKind, Vec<Card>)> = Self::rank_groups(hand)
            .into_iter()
            .filter(|(_, cards)| cards.len() >= 4)
            .map(|(_, cards)| (HandKind::Bomb, cards))
            .collect();
        if let Some(cards) = Self::find_wushik(hand) {
            candidates.push((HandKind::Wushik, cards));
        }
        candidates
    }

    /// Assemble one Five, one Ten, and one King. Prefers a flush wushik in
    /// the highest suit available, since flushes outrank mixed wushiks.
    fn find_wushik(hand: &[Card]) -> Option<Vec<Card>> {
        let of_rank = |rank: Rank| -> Vec<Card> {
            hand.iter()
                .copied()
                .filter(|c| c.face.rank() == Some(rank))
                .collect()
        };
        let fives = of_rank(Rank::Five);
        let tens = of_rank(Rank::Ten);
        let kings = of_rank(Rank::King);
        if fives.is_empty() || tens.is_empty() || kings.is_empty() {
            return None;
        }
        for suit in SUITS.iter().rev() {
            let pick = |cards: &[Card]| -> Option<Card> {
                cards.iter().copied().find(|c| c.face.suit() == Some(*suit))
            };
            if let (Some(f), Some(t), Some(k)) = (pick(&fives), pick(&tens), pick(&kings)) {
                return Some(vec![f, t, k]);
            }
        }
        Some(vec![fives[0], tens[0], kings[0]])
    }

    // ---------- selection policy ----------

    /// Lead shape by tier: easy a single, medium pair-then-single, hard
    /// triple-then-pair-then-single, always the lowest-ranked instance.
    fn lead_cards(&self, hand: &[Card]) -> Result<Vec<Card>, AiError> {
        let single = Self::lowest_single(hand)
            .map(|c| vec![c])
            .ok_or_else(|| AiError::InvalidMove("asked to lead with an empty hand".into()))?;
        let cards = match self.difficulty {
            AiDifficulty::Easy => single,
            AiDifficulty::Medium => Self::lowest_group_of(hand, 2).unwrap_or(single),
            AiDifficulty::Hard => Self::lowest_group_of(hand, 3)
                .or_else(|| Self::lowest_group_of(hand, 2))
                .unwrap_or(single),
        };
        Ok(cards)
    }

    /// Among qualifying candidates sorted ascending by rank: easy burns the
    /// highest, medium takes the middle, hard spends the lowest.
    fn select_candidate(&self, mut candidates: Vec<(HandKind, Vec<Card>)>) -> (HandKind, Vec<Card>) {
        candidates.sort_by_key(|(_, cards)| max_rank_value(cards));
        let index = match self.difficulty {
            AiDifficulty::Easy => candidates.len() - 1,
            AiDifficulty::Medium => candidates.len() / 2,
            AiDifficulty::Hard => 0,
        };
        candidates.swap_remove(index)
    }

    /// Whether to actually play the found candidate, or pass anyway.
    fn should_play(
        &self,
        rng: &mut StdRng,
        candidate: &[Card],
        active: &PlayedHand,
        hand_len: usize,
    ) -> bool {
        match self.difficulty {
            AiDifficulty::Easy => true,
            AiDifficulty::Medium => rng.random_bool(0.7),
            AiDifficulty::Hard => {
                // Conservation: keep cards above Ten out of cheap tricks
                // while the hand is still long.
                let has_high = candidate.iter().any(|c| c.rank_value() > Rank::Ten as u8);
                let low_value_trick = active.cards.len() <= 3;
                if has_high && low_value_trick && hand_len > 5 {
                    !rng.random_bool(0.7)
                } else {
                    true
                }
            }
        }
    }
}

impl AiPlayer for HeuristicPlayer {
    fn choose_move(&self, hand: &[Card], active: Option<&PlayedHand>) -> Result<AiMove, AiError> {
        let Some(active) = active else {
            let cards = self.lead_cards(hand)?;
            return Ok(AiMove::Play(cards.iter().map(|c| c.id).collect()));
        };

        let mut qualifying: Vec<(HandKind, Vec<Card>)> = Self::same_kind_candidates(hand, active)
            .into_iter()
            .map(|cards| (active.kind, cards))
            .filter(|(kind, cards)| hand_beats(*kind, cards, active.kind, &active.cards))
            .collect();
        if qualifying.is_empty() {
            // Power hands beat any non-power hand, so search them even when
            // no same-kind answer exists.
            qualifying = Self::power_candidates(hand)
                .into_iter()
                .filter(|(kind, cards)| hand_beats(*kind, cards, active.kind, &active.cards))
                .collect();
        }
        if qualifying.is_empty() {
            return Ok(AiMove::Pass);
        }

        let (_, cards) = self.select_candidate(qualifying);
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        if self.should_play(&mut rng, &cards, active, hand.len()) {
            Ok(AiMove::Play(cards.iter().map(|c| c.id).collect()))
        } else {
            Ok(AiMove::Pass)
        }
    }
}
