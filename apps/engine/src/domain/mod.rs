//! Domain layer: pure WuShiK game logic.

pub mod cards_parsing;
pub mod cards_types;
pub mod classify;
pub mod compare;
pub mod dealing;
pub mod fixtures;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_classify;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use cards_types::{point_value, rank_value, Card, CardFace, CardId, JokerKind, Rank, Suit};
pub use classify::{classify_hand, HandKind};
pub use compare::hand_beats;
pub use state::{AiDifficulty, GameState, Phase, PlayedHand, Player, PlayerId};
