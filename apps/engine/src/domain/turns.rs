//! The play/pass reducers: trick flow within a round.
//!
//! Both entry points take a state snapshot and return a new snapshot plus a
//! `TurnOutcome` describing what cascaded (trick collected, player finished,
//! round ended). Rejections return the error and no new state.

use tracing::info;

use super::classify::classify_hand;
use super::cards_types::CardId;
use super::state::{GameState, Phase, PlayedHand, PlayerId};
use crate::errors::domain::{DomainError, RejectKind};

/// What a successful play or pass changed, for callers that log or animate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    /// Seat that collected the trick, with the points gained.
    pub trick_collected_by: Option<(PlayerId, i32)>,
    /// Seat that emptied its hand, with its finishing position.
    pub player_finished: Option<(PlayerId, u8)>,
    /// The round ended with this play; state is now in RoundReveal.
    pub round_ended: bool,
}

/// Play a combination from the acting player's hand.
pub fn apply_play(
    state: &GameState,
    who: PlayerId,
    card_ids: &[CardId],
) -> Result<(GameState, TurnOutcome), DomainError> {
    state.require_phase(Phase::Playing, "apply_play")?;
    state.player(who)?;
    if state.turn != who {
        return Err(DomainError::rejected(
            RejectKind::OutOfTurn,
            format!("player {who} acted, player {} is to act", state.turn),
        ));
    }
    if card_ids.is_empty() {
        return Err(DomainError::rejected(
            RejectKind::InvalidHand,
            "empty card selection",
        ));
    }

    let cards = state.resolve_cards(who, card_ids)?;
    let Some(kind) = classify_hand(&cards) else {
        return Err(DomainError::rejected(
            RejectKind::InvalidHand,
            format!("{} cards form no legal combination", cards.len()),
        ));
    };
    let candidate = PlayedHand {
        kind,
        cards,
        owner: who,
    };
    if let Some(table) = &state.table {
        if !candidate.beats(table) {
            return Err(DomainError::rejected(
                RejectKind::CannotBeat,
                format!("{kind:?} does not beat the {:?} on the table", table.kind),
            ));
        }
    }

    // Validation done; commit on a fresh snapshot.
    let mut next = state.clone();
    let mut outcome = TurnOutcome::default();

    let player = next.player_mut(who)?;
    player.hand.retain(|c| !card_ids.contains(&c.id));
    let emptied = player.hand.is_empty();

    next.trick_pool.extend(candidate.cards.iter().copied());
    next.table = Some(candidate);
    next.passed.clear();

    if emptied {
        let position = next.next_finish_position();
        next.player_mut(who)?.finish_order = Some(position);
        outcome.player_finished = Some((who, position));
        info!(game_id = %next.game_id, player = who, position, "player finished");
    }

    let active = next.active_seats();
    if active.len() == 1 {
        // Exactly one seat still holds cards: the round is over and that
        // seat is last place. Hands freeze for the reveal.
        next.last_place = Some(active[0]);
        next.phase = Phase::RoundReveal;
        outcome.round_ended = true;
        info!(
            game_id = %next.game_id,
            round = next.round_no,
            last_place = active[0],
            "round ended"
        );
    } else {
        next.turn = next
            .next_active_after(who)
            .ok_or_else(|| DomainError::invariant("no active seat to receive the turn"))?;
    }

    Ok((next, outcome))
}

/// Pass the turn. Illegal while no hand is on the table; someone must lead.
pub fn apply_pass(
    state: &GameState,
    who: PlayerId,
) -> Result<(GameState, TurnOutcome), DomainError> {
    state.require_phase(Phase::Playing, "apply_pass")?;
    state.player(who)?;
    if state.turn != who {
        return Err(DomainError::rejected(
            RejectKind::OutOfTurn,
            format!("player {who} acted, player {} is to act", state.turn),
        ));
    }
    let Some(table) = &state.table else {
        return Err(DomainError::rejected(
            RejectKind::IllegalPass,
            "cannot pass while leading a trick",
        ));
    };
    let owner = table.owner;

    let mut next = state.clone();
    let mut outcome = TurnOutcome::default();
    next.passed.insert(who);

    if trick_is_over(&next, owner) {
        let points: i32 = next.trick_pool.iter().map(|c| c.point_value()).sum();
        next.player_mut(owner)?.temp_points += points;
        next.table = None;
        next.trick_pool.clear();
        next.passed.clear();
        // Collector leads the next trick; if they have already finished,
        // the lead falls to the next seat with cards.
        next.turn = if next.player(owner)?.has_finished() {
            next.next_active_after(owner)
                .ok_or_else(|| DomainError::invariant("no active seat to lead after collection"))?
        } else {
            owner
        };
        outcome.trick_collected_by = Some((owner, points));
        info!(game_id = %next.game_id, collector = owner, points, "trick collected");
    } else {
        next.turn = next
            .next_active_after(who)
            .ok_or_else(|| DomainError::invariant("no active seat to receive the turn"))?;
    }

    Ok((next, outcome))
}

/// The trick is over once every unfinished seat other than the table's owner
/// has passed since the table hand was played.
fn trick_is_over(state: &GameState, owner: PlayerId) -> bool {
    state
        .players
        .iter()
        .filter(|p| !p.has_finished() && p.id != owner)
        .all(|p| state.passed.contains(&p.id))
}
