use twentyone_engine::cards::{all_suits, Card, Rank};
use twentyone_engine::hand::Hand;

/// Builds a hand from ranks, cycling suits so the cards stay distinct.
fn hand_of(ranks: &[Rank]) -> Hand {
    let suits = all_suits();
    let mut hand = Hand::new();
    for (i, &rank) in ranks.iter().enumerate() {
        hand.add_card(Card {
            suit: suits[i % suits.len()],
            rank,
        });
    }
    hand
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn number_ranks_score_their_face_number() {
    assert_eq!(hand_of(&[Rank::Two, Rank::Nine]).value(), 11);
}

#[test]
fn two_face_cards_score_twenty() {
    assert_eq!(hand_of(&[Rank::King, Rank::Queen]).value(), 20);
}

#[test]
fn ace_counts_eleven_when_safe() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).value(), 17);
}

#[test]
fn ace_demotes_to_one_to_avoid_bust() {
    // [Ace, King, 5] must be 16, not 26
    let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Five]);
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_busted());
}

#[test]
fn two_aces_keep_one_eleven() {
    // one Ace as 11, one as 1
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
}

#[test]
fn all_aces_demote_when_needed() {
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King]).value(),
        13
    );
}

#[test]
fn twenty_one_is_not_busted() {
    let hand = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_busted());
}

#[test]
fn bust_detection_over_twenty_one() {
    let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(hand.value(), 25);
    assert!(hand.is_busted());
}

#[test]
fn value_queries_are_pure() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    let first = hand.value();
    for _ in 0..5 {
        assert_eq!(hand.value(), first);
        assert!(!hand.is_busted());
    }
    assert_eq!(hand.cards().len(), 3, "queries must not mutate the hand");
}
