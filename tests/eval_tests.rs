//! Hand evaluator tests for holdem-engine
//!
//! Эти тесты проверяют:
//! - распознавание всех категорий
//! - точную схему очков (роял 9000 ... старшая карта = topRank)
//! - «колесо» A-2-3-4-5 со старшей пятёркой
//! - дробный score двух пар (старшая пара доминирует)
//! - сравнение с эпсилоном
//! - оценку двух карт без борда

use holdem_engine::domain::{Card, Rank, Suit};
use holdem_engine::eval::{evaluate_hand, HandCategory};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

//
// TEST 1 — royal flush
//
#[test]
fn royal_flush_is_detected() {
    let hole = [c("As"), c("Ks")];
    let board = [c("Qs"), c("Js"), c("Ts"), c("2h"), c("3d")];

    let result = evaluate_hand(&hole, &board);
    assert_eq!(result.category, HandCategory::RoyalFlush);
    assert_eq!(result.score, 9000.0);
    assert_eq!(result.winning_cards.len(), 5);
}

//
// TEST 2 — straight flush scores 8000 + top rank
//
#[test]
fn straight_flush_score_uses_top_rank() {
    let hole = [c("9h"), c("8h")];
    let board = [c("7h"), c("6h"), c("5h"), c("Ad"), c("Ac")];

    let result = evaluate_hand(&hole, &board);
    assert_eq!(result.category, HandCategory::StraightFlush);
    assert_eq!(result.score, 8000.0 + 9.0);
}

//
// TEST 3 — four of a kind beats full house
//
#[test]
fn quads_beat_full_house() {
    let board = [c("2s"), c("2d"), c("Kh"), c("Kd"), c("7c")];

    let quads = evaluate_hand(&[c("2h"), c("2c")], &board);
    let full = evaluate_hand(&[c("Kc"), c("7d")], &board);

    assert_eq!(quads.category, HandCategory::FourOfAKind);
    assert_eq!(full.category, HandCategory::FullHouse);
    assert!(quads.beats(&full), "quads must beat full house");
    assert!(!full.beats(&quads));
}

//
// TEST 4 — two pair fractional scoring
//
#[test]
fn two_pair_score_encodes_both_pairs() {
    let kings_fives = evaluate_hand(
        &[c("Kh"), c("Kd")],
        &[c("5c"), c("5s"), c("9h"), c("2d"), c("3c")],
    );
    let queens_jacks = evaluate_hand(
        &[c("Qh"), c("Qd")],
        &[c("Jc"), c("Js"), c("9h"), c("2d"), c("3c")],
    );

    assert_eq!(kings_fives.category, HandCategory::TwoPair);
    assert_eq!(queens_jacks.category, HandCategory::TwoPair);

    // KK55 = 2000 + 13 + 5/100, QQJJ = 2000 + 12 + 11/100.
    assert!((kings_fives.score - 2013.05).abs() < 1e-9);
    assert!((queens_jacks.score - 2012.11).abs() < 1e-9);
    assert!(kings_fives.beats(&queens_jacks), "higher top pair must dominate");
}

//
// TEST 5 — wheel straight (A-2-3-4-5) tops out at five
//
#[test]
fn wheel_straight_top_card_is_five() {
    let result = evaluate_hand(
        &[c("Ah"), c("2d")],
        &[c("3c"), c("4s"), c("5h"), c("Kd"), c("9c")],
    );

    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.score, 4000.0 + 5.0);
    assert_eq!(result.winning_cards[0].rank, Rank::Five, "run starts at five");
    assert_eq!(result.winning_cards[4].rank, Rank::Ace, "ace plays low");
}

//
// TEST 6 — ordinary straight outranks the wheel
//
#[test]
fn six_high_straight_beats_the_wheel() {
    let board = [c("3c"), c("4s"), c("5h"), c("Kd"), c("9c")];

    let wheel = evaluate_hand(&[c("Ah"), c("2d")], &board);
    let six_high = evaluate_hand(&[c("6h"), c("2s")], &board);

    assert!(six_high.beats(&wheel));
}

//
// TEST 7 — flush picks the suited top card
//
#[test]
fn flush_score_uses_top_suited_rank() {
    let result = evaluate_hand(
        &[c("Qd"), c("2d")],
        &[c("9d"), c("7d"), c("4d"), c("As"), c("Ah")],
    );

    assert_eq!(result.category, HandCategory::Flush);
    assert_eq!(result.score, 5000.0 + 12.0);
    assert!(result.winning_cards.iter().all(|card| card.suit == Suit::Diamonds));
}

//
// TEST 8 — trips, pair, high card scores
//
#[test]
fn lower_category_scores_match_the_scheme() {
    let board = [c("8c"), c("Jd"), c("2s"), c("6h"), c("Qc")];

    let trips = evaluate_hand(&[c("8h"), c("8d")], &board);
    assert_eq!(trips.category, HandCategory::ThreeOfAKind);
    assert_eq!(trips.score, 3000.0 + 8.0);

    let pair = evaluate_hand(&[c("Jh"), c("3d")], &board);
    assert_eq!(pair.category, HandCategory::OnePair);
    assert_eq!(pair.score, 1000.0 + 11.0);

    let high = evaluate_hand(&[c("Ah"), c("3d")], &board);
    assert_eq!(high.category, HandCategory::HighCard);
    assert_eq!(high.score, 14.0, "high card score is the top rank alone");
}

//
// TEST 9 — epsilon ties: identical board plays for both
//
#[test]
fn board_plays_produce_an_epsilon_tie() {
    let board = [c("Ah"), c("Ad"), c("Kc"), c("Ks"), c("Qc")];

    let first = evaluate_hand(&[c("2h"), c("3d")], &board);
    let second = evaluate_hand(&[c("4s"), c("5c")], &board);

    assert!(first.ties_with(&second), "identical combinations must tie");
    assert!(!first.beats(&second));
    assert!(!second.beats(&first));
}

//
// TEST 10 — two cards, no board
//
#[test]
fn preflop_hole_cards_evaluate_alone() {
    let pair = evaluate_hand(&[card(Rank::Nine, Suit::Clubs), card(Rank::Nine, Suit::Hearts)], &[]);
    assert_eq!(pair.category, HandCategory::OnePair);
    assert_eq!(pair.score, 1000.0 + 9.0);

    let high = evaluate_hand(&[card(Rank::Ace, Suit::Clubs), card(Rank::Ten, Suit::Hearts)], &[]);
    assert_eq!(high.category, HandCategory::HighCard);
    assert_eq!(high.score, 14.0);
}
