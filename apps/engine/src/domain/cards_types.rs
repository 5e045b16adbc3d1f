//! Core card types: Suit, Rank, jokers, Card, and the two value functions.

use serde::{Deserialize, Serialize};

/// Suit order doubles as the wushik tie-break precedence: C < D < H < S.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// Ranks in game order: Three is lowest, Two is highest. Derived `Ord`
/// follows declaration order, so rank comparisons are game comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JokerKind {
    Small,
    Big,
}

/// Face of a physical card: a suited rank or one of the two jokers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardFace {
    Suited { suit: Suit, rank: Rank },
    Joker(JokerKind),
}

/// Deck-scoped card identity. With multiple decks several physical cards
/// share a face, so ownership and removal always go through the id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
}

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

pub const RANKS: [Rank; 13] = [
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
];

pub const SMALL_JOKER_VALUE: u8 = 100;
pub const BIG_JOKER_VALUE: u8 = 101;

impl CardFace {
    pub fn rank(&self) -> Option<Rank> {
        match self {
            CardFace::Suited { rank, .. } => Some(*rank),
            CardFace::Joker(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            CardFace::Suited { suit, .. } => Some(*suit),
            CardFace::Joker(_) => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, CardFace::Joker(_))
    }
}

/// Position of the face in the total order 3 < ... < 2 < small joker < big
/// joker. This is the sole numeric comparator for "higher card" everywhere
/// in the engine, including consecutiveness checks.
pub fn rank_value(face: CardFace) -> u8 {
    match face {
        CardFace::Suited { rank, .. } => rank as u8,
        CardFace::Joker(JokerKind::Small) => SMALL_JOKER_VALUE,
        CardFace::Joker(JokerKind::Big) => BIG_JOKER_VALUE,
    }
}

/// Scoring value: Fives are worth 5, Tens and Kings 10, everything else
/// (jokers included) 0. One deck carries exactly 100 points.
pub fn point_value(face: CardFace) -> i32 {
    match face {
        CardFace::Suited { rank: Rank::Five, .. } => 5,
        CardFace::Suited { rank: Rank::Ten, .. } => 10,
        CardFace::Suited { rank: Rank::King, .. } => 10,
        _ => 0,
    }
}

/// Stable display ordering key: suited cards by suit then rank, jokers last.
/// Has no gameplay meaning; hands may be re-sorted freely.
pub fn display_key(face: CardFace) -> (u8, u8, u8) {
    match face {
        CardFace::Suited { suit, rank } => (0, suit as u8, rank as u8),
        CardFace::Joker(kind) => (1, kind as u8, 0),
    }
}

impl Card {
    pub fn rank_value(&self) -> u8 {
        rank_value(self.face)
    }

    pub fn point_value(&self) -> i32 {
        point_value(self.face)
    }

    pub fn is_joker(&self) -> bool {
        self.face.is_joker()
    }
}
