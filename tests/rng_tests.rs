//! RNG tests for holdem-engine
//!
//! Эти тесты проверяют:
//! - точные константы LCG и первые значения последовательности
//! - детерминированность create_deck по seed
//! - различие seed → различие колод
//! - перестановку без повторов
//! - диапазон next_unit
//! - фатальное исчерпание колоды

use holdem_engine::domain::Deck;
use holdem_engine::engine::RandomSource;
use holdem_engine::infra::rng::Lcg;
use holdem_engine::create_deck;

//
// TEST 1 — exact LCG sequence
//
#[test]
fn lcg_first_values_match_the_formula() {
    // state = (state * 9301 + 49297) % 233280, выход state / 233280
    let mut rng = Lcg::new(1);

    let v1 = rng.next_unit();
    assert!((v1 - 58598.0 / 233280.0).abs() < 1e-12, "first value mismatch");

    let v2 = rng.next_unit();
    assert!((v2 - 127215.0 / 233280.0).abs() < 1e-12, "second value mismatch");
}

//
// TEST 2 — next_unit stays in [0, 1)
//
#[test]
fn lcg_output_is_a_unit_interval() {
    let mut rng = Lcg::new(987654321);
    for _ in 0..10_000 {
        let v = rng.next_unit();
        assert!((0.0..1.0).contains(&v), "value {v} escaped [0, 1)");
    }
}

//
// TEST 3 — same seed, same deck
//
#[test]
fn same_seed_produces_identical_deck() {
    let a = create_deck(123456);
    let b = create_deck(123456);
    assert_eq!(a.cards(), b.cards(), "same seed must produce identical order");
}

//
// TEST 4 — different seeds, different decks
//
#[test]
fn different_seeds_produce_different_decks() {
    let a = create_deck(111);
    let b = create_deck(222);
    assert_ne!(a.cards(), b.cards(), "different seeds must differ");
}

//
// TEST 5 — shuffled deck is a permutation
//
#[test]
fn shuffled_deck_is_a_permutation_of_52() {
    let deck = create_deck(777);
    assert_eq!(deck.remaining(), 52);

    let mut seen = deck.cards().to_vec();
    seen.sort_by_key(|c| (c.suit as u8, c.rank));
    seen.dedup();
    assert_eq!(seen.len(), 52, "shuffle must not duplicate or drop cards");
}

//
// TEST 6 — shuffle actually reorders the canonical deck
//
#[test]
fn shuffle_reorders_canonical_deck() {
    let before = Deck::standard_52().cards().to_vec();
    let mut after = before.clone();
    Lcg::new(999).shuffle(&mut after);
    assert_ne!(after, before);
}

//
// TEST 7 — drawing past the end of the deck fails loudly
//
#[test]
#[should_panic(expected = "колода исчерпана")]
fn drawing_the_53rd_card_panics() {
    let mut deck = create_deck(42);
    for _ in 0..52 {
        deck.draw();
    }
    deck.draw();
}
