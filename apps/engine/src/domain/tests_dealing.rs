use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{CardFace, Rank, Suit};
use super::dealing::{
    add_ai_player, add_player, deal_hands, decks_for_players, start_game, DECK_SIZE,
};
use super::state::{AiDifficulty, GameState, Phase};
use crate::config::GameConfig;
use crate::errors::domain::RejectKind;

#[test]
fn one_deck_per_four_seats() {
    assert_eq!(decks_for_players(2), 1);
    assert_eq!(decks_for_players(3), 1);
    assert_eq!(decks_for_players(4), 1);
    assert_eq!(decks_for_players(5), 2);
    assert_eq!(decks_for_players(8), 2);
    assert_eq!(decks_for_players(9), 3);
}

#[test]
fn deal_conserves_every_card() {
    for players in [3usize, 4, 5, 7] {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let deal = deal_hands(players, &mut rng).unwrap();
        let total = decks_for_players(players) * DECK_SIZE;

        let mut ids: Vec<u16> = deal.hands.iter().flatten().map(|c| c.id.0).collect();
        assert_eq!(ids.len(), total, "no card dropped");
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "no card duplicated");
    }
}

#[test]
fn hand_sizes_differ_by_at_most_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let deal = deal_hands(5, &mut rng).unwrap();
    let sizes: Vec<usize> = deal.hands.iter().map(Vec::len).collect();
    let min = sizes.iter().min().unwrap();
    let max = sizes.iter().max().unwrap();
    assert!(max - min <= 1, "round-robin keeps sizes within one: {sizes:?}");
    // 108 cards over 5 seats: three seats of 22, two of 21.
    assert_eq!(sizes.iter().sum::<usize>(), 108);
}

#[test]
fn first_seat_holds_the_three_of_spades() {
    let three_of_spades = CardFace::Suited {
        suit: Suit::Spades,
        rank: Rank::Three,
    };
    for seed in 0..20u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deal = deal_hands(4, &mut rng).unwrap();
        let holder = deal.hands[deal.first_seat as usize]
            .iter()
            .any(|c| c.face == three_of_spades);
        assert!(holder, "seed {seed}: first seat must hold 3S");
    }
}

#[test]
fn deal_is_deterministic_per_seed() {
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    assert_eq!(deal_hands(4, &mut a).unwrap(), deal_hands(4, &mut b).unwrap());

    let mut c = ChaCha8Rng::seed_from_u64(100);
    assert_ne!(deal_hands(4, &mut a).unwrap(), deal_hands(4, &mut c).unwrap());
}

#[test]
fn hands_are_display_sorted() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let deal = deal_hands(4, &mut rng).unwrap();
    for hand in &deal.hands {
        let mut sorted = hand.clone();
        super::dealing::sort_for_display(&mut sorted);
        assert_eq!(hand, &sorted);
    }
}

#[test]
fn roster_changes_only_while_waiting() {
    let config = GameConfig::default();
    let state = GameState::new("g", &config);
    let (state, s0) = add_player(&state, "Ana").unwrap();
    let (state, s1) = add_player(&state, "Ben").unwrap();
    let (state, s2) = add_ai_player(&state, "Bot", AiDifficulty::Easy).unwrap();
    assert_eq!((s0, s1, s2), (0, 1, 2));

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let state = start_game(&state, &mut rng).unwrap();
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.round_no, 1);
    assert!(state.players.iter().all(|p| !p.hand.is_empty()));

    let err = add_player(&state, "Late").unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::PhaseMismatch));
}

#[test]
fn start_game_requires_three_players() {
    let config = GameConfig::default();
    let state = GameState::new("g", &config);
    let (state, _) = add_player(&state, "Ana").unwrap();
    let (state, _) = add_player(&state, "Ben").unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let err = start_game(&state, &mut rng).unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::RosterTooSmall));
}
