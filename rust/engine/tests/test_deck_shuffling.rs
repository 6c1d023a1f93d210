use std::collections::HashSet;

use twentyone_engine::cards::Card;
use twentyone_engine::deck::Deck;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.draw().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut reference = Deck::new_with_seed(0);
    let mut shuffled = Deck::new_with_seed(99);
    shuffled.shuffle();

    let a: HashSet<Card> = (0..52).map(|_| reference.draw().unwrap()).collect();
    let b: HashSet<Card> = (0..52).map(|_| shuffled.draw().unwrap()).collect();
    assert_eq!(a, b, "shuffle must be a permutation, not a resampling");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    // Compare first 10 cards
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_rebuilds_a_full_deck() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    for _ in 0..10 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 42);

    // next round: a fresh 52-card deck, nothing carried over
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    while let Some(c) = deck.draw() {
        assert!(set.insert(c));
    }
    assert_eq!(set.len(), 52);
}
