//! AI player trait definition.

use thiserror::Error;

use crate::domain::cards_types::{Card, CardId};
use crate::domain::state::PlayedHand;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error.
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI was asked to act in a position with no legal action.
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A decision produced by an AI seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiMove {
    Play(Vec<CardId>),
    Pass,
}

/// Trait for AI players.
///
/// Implementations receive the acting seat's hand and the hand currently on
/// the table (`None` when leading) and must choose an action the reducer
/// will accept: a legal combination that beats the table, or a pass when a
/// table hand is active.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, hand: &[Card], active: Option<&PlayedHand>) -> Result<AiMove, AiError>;
}
