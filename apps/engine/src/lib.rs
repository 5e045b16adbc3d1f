//! WuShiK rules engine: hand classification, the beat ordering between
//! plays, dealing, the turn/round reducer, and heuristic AI seats.
//!
//! The engine is pure and synchronous: every transition maps a state
//! snapshot and an action to a new snapshot or a rejection, and no operation
//! performs I/O. Transport, persistence, rendering, and timers belong to the
//! embedding application, which is expected to save each returned snapshot
//! and fan it out to all participants.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;

pub use ai::{create_ai, decide_ai_move, AiError, AiMove, AiPlayer, HeuristicPlayer};
pub use config::GameConfig;
pub use domain::classify::{classify_hand, HandKind};
pub use domain::compare::hand_beats;
pub use domain::cards_types::{point_value, rank_value, Card, CardFace, CardId, JokerKind, Rank, Suit};
pub use domain::dealing::{
    add_ai_player, add_player, build_deck, deal_hands, start_game, DealResult,
};
pub use domain::scoring::{continue_from_reveal, start_next_round, RoundSettlement};
pub use domain::snapshot::{from_document, to_document};
pub use domain::state::{AiDifficulty, GameState, Phase, PlayedHand, Player, PlayerId};
pub use domain::turns::{apply_pass, apply_play, TurnOutcome};
pub use errors::domain::{DomainError, RejectKind};
