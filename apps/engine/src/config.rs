//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::domain::state::AiDifficulty;

pub const DEFAULT_TARGET_POINTS: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// First player whose running total reaches this ends the game.
    pub target_points: i32,
    /// Tier assigned to AI seats added without an explicit difficulty.
    pub default_ai_difficulty: AiDifficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_points: DEFAULT_TARGET_POINTS,
            default_ai_difficulty: AiDifficulty::Medium,
        }
    }
}

impl GameConfig {
    pub fn with_target(target_points: i32) -> Self {
        Self {
            target_points,
            ..Self::default()
        }
    }
}
