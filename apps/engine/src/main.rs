//! Headless simulation driver: seats AI players and runs a full game
//! through the pure reducers, standing in for the interactive client.
//!
//! Usage: wushik-sim [seed] [players]

use std::env;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wushik_engine::{
    add_ai_player, apply_pass, apply_play, continue_from_reveal, start_game, start_next_round,
    AiDifficulty, AiMove, AiPlayer, GameConfig, GameState, HeuristicPlayer, Phase,
};

const MAX_STEPS: usize = 1_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);
    let players: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(4);

    let config = GameConfig::default();
    let mut state = GameState::new(format!("sim-{seed}"), &config);

    let tiers = [AiDifficulty::Easy, AiDifficulty::Medium, AiDifficulty::Hard];
    let mut ais: Vec<HeuristicPlayer> = Vec::with_capacity(players);
    for seat in 0..players {
        let tier = tiers[seat % tiers.len()];
        let (next, id) = add_ai_player(&state, format!("bot-{seat}"), tier)?;
        state = next;
        ais.push(HeuristicPlayer::new(tier, Some(seed.wrapping_add(id as u64))));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    state = start_game(&state, &mut rng)?;

    for _ in 0..MAX_STEPS {
        match state.phase {
            Phase::Playing => {
                let seat = state.turn;
                let player = state.player(seat)?;
                let ai = &ais[seat as usize];
                let decision = ai.choose_move(&player.hand, state.table.as_ref())?;
                state = match decision {
                    AiMove::Play(cards) => apply_play(&state, seat, &cards)?.0,
                    AiMove::Pass => apply_pass(&state, seat)?.0,
                };
            }
            Phase::RoundReveal => {
                let (next, settlement) = continue_from_reveal(&state)?;
                info!(
                    first = settlement.first,
                    second = settlement.second,
                    last = settlement.last,
                    forfeited = settlement.forfeited_points,
                    hand_points = settlement.hand_points,
                    "round settled"
                );
                state = next;
            }
            Phase::RoundEnd => {
                state = start_next_round(&state, &mut rng)?;
            }
            Phase::GameOver => break,
            Phase::Waiting => unreachable!("game already started"),
        }
    }

    match state.winner {
        Some(seat) => {
            let winner = state.player(seat)?;
            info!(
                winner = %winner.name,
                points = winner.total_points,
                rounds = state.round_no,
                "game over"
            );
        }
        None => info!(rounds = state.round_no, "step limit reached before game end"),
    }
    for player in &state.players {
        println!(
            "{:<10} total={:<5} first_places={}",
            player.name, player.total_points, player.first_place_wins
        );
    }
    Ok(())
}
