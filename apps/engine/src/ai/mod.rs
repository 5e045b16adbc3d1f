//! AI players: automated seats driven by the same classifier and comparator
//! as player-submitted actions.

mod heuristic;
mod trait_def;


pub use heuristic::HeuristicPlayer;
pub use trait_def::{AiError, AiMove, AiPlayer};

use crate::domain::state::{AiDifficulty, PlayedHand, Player};

/// Build the AI for a difficulty tier. Seed the RNG for reproducible play.
pub fn create_ai(difficulty: AiDifficulty, seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HeuristicPlayer::new(difficulty, seed))
}

/// One-shot decision for the acting player against the current table hand.
pub fn decide_ai_move(
    player: &Player,
    active: Option<&PlayedHand>,
    difficulty: AiDifficulty,
    seed: Option<u64>,
) -> Result<AiMove, AiError> {
    HeuristicPlayer::new(difficulty, seed).choose_move(&player.hand, active)
}
