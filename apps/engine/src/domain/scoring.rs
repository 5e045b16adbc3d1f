//! Round-end point redistribution and the round/game boundary reducers.

use rand::Rng;
use tracing::info;

use super::dealing::deal_hands;
use super::state::{GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

/// Per-round settlement, reported alongside the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSettlement {
    pub first: PlayerId,
    pub second: PlayerId,
    pub last: PlayerId,
    /// Trick points the last player forfeited to first place.
    pub forfeited_points: i32,
    /// Unplayed-hand points awarded to second place.
    pub hand_points: i32,
    /// Winner, if this settlement ended the game.
    pub winner: Option<PlayerId>,
}

/// Settle the revealed round: redistribute points, reset per-round fields,
/// and move to RoundEnd, or to GameOver if a player reached the target.
///
/// Redistribution: every player gains their own trick points, except that
/// first place additionally gains the last player's trick points, second
/// place gains the last player's unplayed-hand points, and the last player
/// gains nothing at all.
pub fn continue_from_reveal(
    state: &GameState,
) -> Result<(GameState, RoundSettlement), DomainError> {
    state.require_phase(Phase::RoundReveal, "continue_from_reveal")?;
    let last = state
        .last_place
        .ok_or_else(|| DomainError::invariant("reveal phase without a last-place seat"))?;
    let first = state
        .seat_with_finish_position(1)
        .ok_or_else(|| DomainError::invariant("no first-place finisher at round end"))?;
    let second = state
        .seat_with_finish_position(2)
        .ok_or_else(|| DomainError::invariant("no second-place finisher at round end"))?;

    let mut next = state.clone();
    let forfeited_points = next.player(last)?.temp_points;
    let hand_points = next.player(last)?.hand_points();

    for player in &mut next.players {
        let mut gain = if player.id == last { 0 } else { player.temp_points };
        if player.id == first {
            gain += forfeited_points;
        }
        if player.id == second {
            gain += hand_points;
        }
        player.total_points += gain;
        player.temp_points = 0;
        player.finish_order = None;
    }
    next.player_mut(first)?.first_place_wins += 1;

    // The final, uncollected trick leaves play with the round.
    next.table = None;
    next.trick_pool.clear();
    next.passed.clear();
    next.last_place = None;

    // First seat in order to reach the target wins; simultaneous crossers
    // resolve by seat order.
    let winner = next
        .players
        .iter()
        .find(|p| p.total_points >= next.target_points)
        .map(|p| p.id);
    if let Some(seat) = winner {
        next.winner = Some(seat);
        next.phase = Phase::GameOver;
        info!(game_id = %next.game_id, winner = seat, "game over");
    } else {
        next.phase = Phase::RoundEnd;
        info!(game_id = %next.game_id, round = next.round_no, "round settled");
    }

    Ok((
        next,
        RoundSettlement {
            first,
            second,
            last,
            forfeited_points,
            hand_points,
            winner,
        },
    ))
}

/// Deal the next round from a standings checkpoint.
pub fn start_next_round(state: &GameState, rng: &mut impl Rng) -> Result<GameState, DomainError> {
    state.require_phase(Phase::RoundEnd, "start_next_round")?;

    let mut next = state.clone();
    let deal = deal_hands(next.players.len(), rng)?;
    for (player, hand) in next.players.iter_mut().zip(deal.hands) {
        player.hand = hand;
        player.temp_points = 0;
        player.finish_order = None;
    }
    next.table = None;
    next.trick_pool.clear();
    next.passed.clear();
    next.last_place = None;
    next.turn = deal.first_seat;
    next.round_no += 1;
    next.phase = Phase::Playing;
    info!(
        game_id = %next.game_id,
        round = next.round_no,
        first_seat = deal.first_seat,
        "next round dealt"
    );
    Ok(next)
}
