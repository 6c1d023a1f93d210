use crate::cards::{Card, Rank};

/// Best achievable total before a hand busts.
pub const TARGET_VALUE: u32 = 21;

/// An ordered collection of cards belonging to one party (player or dealer).
/// Order affects display only; the value is a pure function of the cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best blackjack total for this hand. Every Ace starts at 11, then
    /// Aces are demoted to 1 one at a time while the total exceeds 21 and
    /// demotable Aces remain. Pure: never mutates the hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use twentyone_engine::cards::{Card, Rank, Suit};
    /// use twentyone_engine::hand::Hand;
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card { suit: Suit::Spades, rank: Rank::Ace });
    /// hand.add_card(Card { suit: Suit::Hearts, rank: Rank::Ace });
    /// hand.add_card(Card { suit: Suit::Clubs, rank: Rank::Nine });
    /// assert_eq!(hand.value(), 21);
    /// ```
    pub fn value(&self) -> u32 {
        let mut total = 0;
        let mut aces = 0;
        for card in &self.cards {
            total += card.base_value();
            if card.rank == Rank::Ace {
                aces += 1;
            }
        }
        // each demotion turns an 11 into a 1
        while total > TARGET_VALUE && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total
    }

    /// True iff the hand exceeds 21 even with every Ace counted as 1.
    pub fn is_busted(&self) -> bool {
        self.value() > TARGET_VALUE
    }
}
