use super::classify::{classify_hand, HandKind};
use super::fixtures::CardFixtures;

fn kind_of(tokens: &[&str]) -> Option<HandKind> {
    classify_hand(&CardFixtures::parse_hardcoded(tokens))
}

#[test]
fn single_is_unconditional() {
    assert_eq!(kind_of(&["3C"]), Some(HandKind::Single));
    assert_eq!(kind_of(&["BJ"]), Some(HandKind::Single));
}

#[test]
fn empty_selection_is_invalid() {
    assert_eq!(kind_of(&[]), None);
}

#[test]
fn pair_requires_matching_rank() {
    assert_eq!(kind_of(&["5C", "5D"]), Some(HandKind::Pair));
    assert_eq!(kind_of(&["5C", "6D"]), None);
}

#[test]
fn jokers_never_pair() {
    assert_eq!(kind_of(&["SJ", "SJ"]), None);
    assert_eq!(kind_of(&["SJ", "BJ"]), None);
    assert_eq!(kind_of(&["SJ", "2C"]), None);
}

#[test]
fn triple_requires_three_of_a_rank() {
    assert_eq!(kind_of(&["9C", "9D", "9H"]), Some(HandKind::Triple));
    assert_eq!(kind_of(&["9C", "9D", "8H"]), None);
}

#[test]
fn five_ten_king_is_wushik() {
    assert_eq!(kind_of(&["5C", "TD", "KH"]), Some(HandKind::Wushik));
    // Suits are free; the same-suit form is still a wushik.
    assert_eq!(kind_of(&["5S", "TS", "KS"]), Some(HandKind::Wushik));
}

#[test]
fn malformed_three_card_selections_are_invalid() {
    assert_eq!(kind_of(&["5C", "5D", "TH"]), None);
    assert_eq!(kind_of(&["5C", "TD", "AH"]), None);
    assert_eq!(kind_of(&["5C", "TD", "BJ"]), None);
}

#[test]
fn four_or_more_of_a_rank_is_a_bomb() {
    assert_eq!(kind_of(&["7C", "7D", "7H", "7S"]), Some(HandKind::Bomb));
    assert_eq!(kind_of(&["7C", "7D", "7H", "7S", "7C"]), Some(HandKind::Bomb));
}

#[test]
fn jokers_are_excluded_from_bombs() {
    assert_eq!(kind_of(&["7C", "7D", "7H", "BJ"]), None);
    assert_eq!(kind_of(&["SJ", "SJ", "BJ", "BJ"]), None);
}

#[test]
fn four_mismatched_cards_are_invalid() {
    assert_eq!(kind_of(&["3C", "4D", "5H", "6S"]), None);
}

#[test]
fn straight_needs_five_consecutive_ranks() {
    assert_eq!(kind_of(&["3C", "4C", "5D", "6H", "7S"]), Some(HandKind::Straight));
    assert_eq!(
        kind_of(&["9C", "TD", "JH", "QS", "KC", "AD"]),
        Some(HandKind::Straight)
    );
    // A gap breaks it.
    assert_eq!(kind_of(&["3C", "4C", "5D", "6H", "8S"]), None);
}

#[test]
fn joker_breaks_a_straight() {
    assert_eq!(kind_of(&["3C", "4C", "5D", "6H", "BJ"]), None);
}

#[test]
fn no_wraparound_from_two_to_three() {
    // Two sits on top of the order, so 2-3-4-5-6 is not consecutive.
    assert_eq!(kind_of(&["2C", "3C", "4D", "5H", "6S"]), None);
    // But the high end may run up to the Two.
    assert_eq!(kind_of(&["TC", "JC", "QD", "KH", "AS", "2S"]), Some(HandKind::Straight));
}

#[test]
fn triple_double_is_three_consecutive_pairs() {
    assert_eq!(
        kind_of(&["3C", "3D", "4H", "4S", "5C", "5D"]),
        Some(HandKind::TripleDouble)
    );
    assert_eq!(
        kind_of(&["8C", "8D", "9H", "9S", "TC", "TD", "JH", "JS"]),
        Some(HandKind::TripleDouble)
    );
}

#[test]
fn triple_double_rejects_gaps_and_short_runs() {
    // Pairs must be rank-consecutive.
    assert_eq!(kind_of(&["3C", "3D", "4H", "4S", "6C", "6D"]), None);
    // Two pairs are not enough; length 4 falls through every branch.
    assert_eq!(kind_of(&["3C", "3D", "4H", "4S"]), None);
    // Odd-length runs cannot decompose into pairs.
    assert_eq!(kind_of(&["3C", "3D", "4H", "4S", "5C", "5D", "6H"]), None);
    // An unpaired rank in the middle fails the decomposition.
    assert_eq!(kind_of(&["3C", "3D", "4H", "5S", "5C", "5D"]), None);
}

#[test]
fn classification_is_deterministic() {
    let cards = CardFixtures::parse_hardcoded(&["5C", "TD", "KH"]);
    assert_eq!(classify_hand(&cards), classify_hand(&cards));
}
