//! Whole-game JSON document for the replication boundary.
//!
//! The collaborating sync layer persists one document per game id and fans it
//! out to every participant. All card, player, and table records live inline,
//! so a game resumes from a single document.

use serde_json::Value;

use super::state::GameState;
use crate::errors::domain::DomainError;

pub fn to_document(state: &GameState) -> Result<Value, DomainError> {
    serde_json::to_value(state)
        .map_err(|e| DomainError::invariant(format!("serialize game state: {e}")))
}

pub fn from_document(doc: Value) -> Result<GameState, DomainError> {
    serde_json::from_value(doc)
        .map_err(|e| DomainError::invariant(format!("deserialize game state: {e}")))
}
