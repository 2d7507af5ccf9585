//! Card ordering, classification and comparison.
//!
//! Properties tested:
//! - Card order agrees with the dense 0..52 index
//! - Same-rank sets of 1-4 distinct cards classify by count; mixed ranks never do
//! - `beats` is irreflexive and asymmetric
//! - Every non-PASS legal play is drawn from the hand and beats the table

mod common;

use proptest::prelude::*;
use proptest::sample::subsequence;

use common::{cards, play};
use slave_engine::cards::{Card, Deck, Rank, Suit};
use slave_engine::core::GameError;
use slave_engine::rules::{
    beats, classify, combinations, legal_plays, precedence, Play, PlayType, Precedence,
};

fn card() -> impl Strategy<Value = Card> {
    (0u8..52).prop_map(|i| Card::decode(i).unwrap())
}

fn hand() -> impl Strategy<Value = Vec<Card>> {
    subsequence(Deck::new().cards().to_vec(), 1..=13)
}

/// A non-PASS play of a random rank and size.
fn any_play() -> impl Strategy<Value = Play> {
    (0usize..13, subsequence(Suit::ALL.to_vec(), 1..=4)).prop_map(|(rank, suits)| {
        let rank = Rank::ALL[rank];
        let set: Vec<Card> = suits.into_iter().map(|s| Card::new(rank, s)).collect();
        classify(&set).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_order_matches_index(a in 0u8..52, b in 0u8..52) {
        let (ca, cb) = (Card::decode(a).unwrap(), Card::decode(b).unwrap());
        prop_assert_eq!(ca.cmp(&cb), a.cmp(&b));
        prop_assert_eq!(ca.encode(), a);
    }

    #[test]
    fn prop_text_form_parses_back(c in card()) {
        let token = format!("{}{}", rank_token(c.rank), suit_token(c.suit));
        prop_assert_eq!(token.parse::<Card>().unwrap(), c);
        prop_assert_eq!(token.to_lowercase().parse::<Card>().unwrap(), c);
    }

    #[test]
    fn prop_same_rank_classifies_by_count(p in any_play()) {
        let kind = PlayType::from_count(p.cards().len()).unwrap();
        prop_assert_eq!(p.kind(), kind);
        prop_assert!(p.cards().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_mixed_ranks_rejected(a in card(), b in card()) {
        prop_assume!(a.rank != b.rank);
        prop_assert!(matches!(classify(&[a, b]), Err(GameError::InvalidCombination(_))));
    }

    #[test]
    fn prop_beats_irreflexive_and_asymmetric(a in any_play(), b in any_play()) {
        prop_assert!(!beats(&a, &a));
        prop_assert!(!(beats(&a, &b) && beats(&b, &a)));
    }

    #[test]
    fn prop_legal_plays_sound(h in hand(), table in any_play()) {
        let plays = legal_plays(&h, Some(&table));
        prop_assert!(plays[0].is_pass());
        for candidate in &plays[1..] {
            prop_assert!(candidate.cards().iter().all(|c| h.contains(c)));
            prop_assert!(beats(candidate, &table));
        }
        // Complete: every beating combination is offered.
        let beating = combinations(&h).into_iter().filter(|c| beats(c, &table)).count();
        prop_assert_eq!(plays.len(), beating + 1);
    }

    #[test]
    fn prop_leading_never_offers_pass(h in hand()) {
        let plays = legal_plays(&h, None);
        prop_assert!(!plays.is_empty());
        prop_assert!(plays.iter().all(|p| !p.is_pass()));
        // Every card in hand can be led as a single.
        let singles = plays.iter().filter(|p| p.kind() == PlayType::Single).count();
        prop_assert_eq!(singles, h.len());
    }
}

fn rank_token(rank: Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        other => other.to_string(),
    }
}

fn suit_token(suit: Suit) -> char {
    match suit {
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Hearts => 'H',
        Suit::Spades => 'S',
    }
}

#[test]
fn test_two_is_highest_rank() {
    assert!(cards("2C")[0] > cards("AS")[0]);
    assert!(cards("3S")[0] < cards("4C")[0]);
    assert_eq!(Card::decode(51).unwrap(), cards("2S")[0]);
    assert_eq!(Card::decode(52), Err(GameError::InvalidCardIndex(52)));
}

#[test]
fn test_precedence_table() {
    use PlayType::*;
    assert_eq!(precedence(Single, Single), Precedence::Compare);
    assert_eq!(precedence(ThreeOfKind, Single), Precedence::Always);
    assert_eq!(precedence(FourOfKind, Pair), Precedence::Always);
    assert_eq!(precedence(Single, Pair), Precedence::Illegal);
    assert_eq!(precedence(Pair, ThreeOfKind), Precedence::Illegal);
    assert_eq!(precedence(FourOfKind, ThreeOfKind), Precedence::Illegal);
    assert_eq!(precedence(Pass, Single), Precedence::Illegal);
}

#[test]
fn test_overrides_ignore_rank() {
    assert!(beats(&play("3C 3D 3H"), &play("2S")));
    assert!(beats(&play("3C 3D 3H 3S"), &play("2H 2S")));
    assert!(!beats(&play("2C 2D 2H"), &play("3C 3D")));
    assert!(!beats(&play("2S"), &play("3C 3D 3H")));
}

#[test]
fn test_equal_rank_decided_by_highest_suit() {
    assert!(beats(&play("9S"), &play("9H")));
    assert!(beats(&play("9C 9S"), &play("9D 9H")));
    assert!(!beats(&play("9C 9H"), &play("9D 9S")));
}

#[test]
fn test_three_kings_enumeration() {
    let h = cards("KC KD KH");
    let plays = combinations(&h);
    let count = |kind| plays.iter().filter(|p| p.kind() == kind).count();
    assert_eq!(count(PlayType::Single), 3);
    assert_eq!(count(PlayType::Pair), 3);
    assert_eq!(count(PlayType::ThreeOfKind), 1);
    assert_eq!(count(PlayType::FourOfKind), 0);
}
