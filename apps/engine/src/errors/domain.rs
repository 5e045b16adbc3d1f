//! Domain-level error type used across the engine.
//!
//! Every rejection is synchronous and leaves the submitted state untouched;
//! the caller surfaces the reason and submits a corrected action. `Invariant`
//! marks corrupted upstream state (a logic bug or a bad snapshot) and is not
//! recoverable by resubmission.

use thiserror::Error;

/// Recoverable rejection kinds for player-submitted actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectKind {
    /// Selected cards form no legal combination.
    InvalidHand,
    /// Candidate combination does not outrank the hand on the table.
    CannotBeat,
    /// Action submitted by a player other than the one to act.
    OutOfTurn,
    /// Pass submitted while no hand is on the table.
    IllegalPass,
    /// Referenced player id does not resolve against the roster.
    PlayerNotFound,
    /// Referenced card id is not in the acting player's hand.
    CardNotInHand,
    /// Action is not legal in the current phase.
    PhaseMismatch,
    /// Game cannot start with the current roster.
    RosterTooSmall,
    /// Card token could not be parsed.
    ParseCard,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Action rejected with no state change.
    #[error("rejected ({kind:?}): {detail}")]
    Rejected { kind: RejectKind, detail: String },
    /// Invariant violation; the state itself is suspect.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn rejected(kind: RejectKind, detail: impl Into<String>) -> Self {
        Self::Rejected {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The rejection kind, if this is a recoverable rejection.
    pub fn reject_kind(&self) -> Option<RejectKind> {
        match self {
            Self::Rejected { kind, .. } => Some(*kind),
            Self::Invariant(_) => None,
        }
    }
}
