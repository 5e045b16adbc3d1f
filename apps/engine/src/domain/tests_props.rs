//! Property tests over the classifier, comparator, and dealing.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, CardFace, CardId, Rank, Suit, RANKS, SUITS};
use super::classify::classify_hand;
use super::compare::hand_beats;
use super::dealing::{deal_hands, decks_for_players, DECK_SIZE};

fn suited(suit: Suit, rank: Rank) -> CardFace {
    CardFace::Suited { suit, rank }
}

fn cards_from(faces: Vec<CardFace>) -> Vec<Card> {
    faces
        .into_iter()
        .enumerate()
        .map(|(i, face)| Card {
            id: CardId(i as u16),
            face,
        })
        .collect()
}

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(RANKS.to_vec())
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(SUITS.to_vec())
}

fn single() -> BoxedStrategy<Vec<Card>> {
    (rank(), suit())
        .prop_map(|(r, s)| cards_from(vec![suited(s, r)]))
        .boxed()
}

fn pair() -> BoxedStrategy<Vec<Card>> {
    (rank(), suit(), suit())
        .prop_map(|(r, s1, s2)| cards_from(vec![suited(s1, r), suited(s2, r)]))
        .boxed()
}

fn triple() -> BoxedStrategy<Vec<Card>> {
    (rank(), suit(), suit(), suit())
        .prop_map(|(r, s1, s2, s3)| {
            cards_from(vec![suited(s1, r), suited(s2, r), suited(s3, r)])
        })
        .boxed()
}

fn bomb() -> BoxedStrategy<Vec<Card>> {
    (rank(), 4usize..=6)
        .prop_map(|(r, n)| cards_from((0..n).map(|i| suited(SUITS[i % 4], r)).collect()))
        .boxed()
}

fn wushik() -> BoxedStrategy<Vec<Card>> {
    (suit(), suit(), suit())
        .prop_map(|(a, b, c)| {
            cards_from(vec![
                suited(a, Rank::Five),
                suited(b, Rank::Ten),
                suited(c, Rank::King),
            ])
        })
        .boxed()
}

fn straight() -> BoxedStrategy<Vec<Card>> {
    (0usize..=8, prop::collection::vec(suit(), 5))
        .prop_map(|(start, suits)| {
            cards_from(
                suits
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| suited(s, RANKS[start + i]))
                    .collect(),
            )
        })
        .boxed()
}

fn triple_double() -> BoxedStrategy<Vec<Card>> {
    (0usize..=10, prop::collection::vec(suit(), 6))
        .prop_map(|(start, suits)| {
            let faces = suits
                .into_iter()
                .enumerate()
                .map(|(i, s)| suited(s, RANKS[start + i / 2]))
                .collect();
            cards_from(faces)
        })
        .boxed()
}

fn valid_hand() -> BoxedStrategy<Vec<Card>> {
    prop_oneof![
        single(),
        pair(),
        triple(),
        bomb(),
        wushik(),
        straight(),
        triple_double(),
    ]
    .boxed()
}

proptest! {
    #[test]
    fn generated_hands_always_classify(hand in valid_hand()) {
        prop_assert!(classify_hand(&hand).is_some());
    }

    #[test]
    fn beats_is_antisymmetric(a in valid_hand(), b in valid_hand()) {
        let ka = classify_hand(&a).expect("generated hand classifies");
        let kb = classify_hand(&b).expect("generated hand classifies");
        let ab = hand_beats(ka, &a, kb, &b);
        let ba = hand_beats(kb, &b, ka, &a);
        prop_assert!(!(ab && ba), "both {ka:?} and {kb:?} claim to beat the other");
    }

    #[test]
    fn dealing_conserves_every_card(players in 2usize..=9, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deal = deal_hands(players, &mut rng).unwrap();
        let total = decks_for_players(players) * DECK_SIZE;

        let mut ids: Vec<u16> = deal.hands.iter().flatten().map(|c| c.id.0).collect();
        prop_assert_eq!(ids.len(), total);
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
