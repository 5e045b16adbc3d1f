//! Card face parsing from string tokens (e.g., "5C", "TD", "SJ", "BJ").

use std::str::FromStr;

use super::cards_types::{CardFace, JokerKind, Rank, Suit};
use crate::errors::domain::{DomainError, RejectKind};

impl FromStr for CardFace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SJ" => return Ok(CardFace::Joker(JokerKind::Small)),
            "BJ" => return Ok(CardFace::Joker(JokerKind::Big)),
            _ => {}
        }
        if s.len() != 2 {
            return Err(DomainError::rejected(
                RejectKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        }
        let mut chars = s.chars();
        let rank_ch = chars.next().ok_or_else(|| {
            DomainError::rejected(RejectKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let suit_ch = chars.next().ok_or_else(|| {
            DomainError::rejected(RejectKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => {
                return Err(DomainError::rejected(
                    RejectKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => {
                return Err(DomainError::rejected(
                    RejectKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        Ok(CardFace::Suited { suit, rank })
    }
}

/// Non-panicking helper to parse face tokens into `CardFace` instances.
pub fn try_parse_faces<I, S>(tokens: I) -> Result<Vec<CardFace>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<CardFace>())
        .collect()
}
