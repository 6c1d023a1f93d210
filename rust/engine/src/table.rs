use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::{self, Outcome};

/// Default starting balance in chips.
pub const STARTING_BALANCE: u32 = 1000;

/// The four states of the round state machine. `DealerTurn` is transient:
/// it is entered and left inside [`Table::stand`], so callers observing the
/// table between operations only ever see the other three.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Betting,
    PlayerTurn,
    DealerTurn,
    RoundOver,
}

/// Cumulative win/loss counters for both parties. Monotonically increasing,
/// purely informational, never reset for the lifetime of a session.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub player_losses: u32,
    pub dealer_wins: u32,
    pub dealer_losses: u32,
}

impl Scoreboard {
    /// A win for one party is a loss for the other; pushes touch nothing.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => {
                self.player_wins += 1;
                self.dealer_losses += 1;
            }
            Outcome::DealerWin => {
                self.player_losses += 1;
                self.dealer_wins += 1;
            }
            Outcome::Push => {}
        }
    }
}

/// One blackjack table: the round/betting state machine plus everything it
/// owns (deck, both hands, balance, current bet, scoreboard, and the
/// dealer hole-card visibility flag the presentation layer renders from).
///
/// All state is owned exclusively by the table and mutated only through the
/// operations below; out-of-phase calls are rejected and leave the state
/// untouched.
///
/// # Examples
///
/// ```
/// use twentyone_engine::table::{Phase, Table};
///
/// let mut table = Table::new(Some(7), 1000);
/// table.place_bet(50).unwrap();
/// table.confirm_bet().unwrap();
/// assert_eq!(table.phase(), Phase::PlayerTurn);
///
/// table.stand().unwrap();
/// assert_eq!(table.phase(), Phase::RoundOver);
/// ```
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    balance: u32,
    bet: u32,
    phase: Phase,
    score: Scoreboard,
    dealer_hole_hidden: bool,
    message: String,
    last_outcome: Option<Outcome>,
    rounds_played: u32,
}

impl Table {
    pub fn new(seed: Option<u64>, starting_balance: u32) -> Self {
        let seed = seed.unwrap_or(0xB1AC_7AC5);
        Self {
            deck: Deck::new_with_seed(seed),
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            balance: starting_balance,
            bet: 0,
            phase: Phase::Betting,
            score: Scoreboard::default(),
            dealer_hole_hidden: true,
            message: "Place your bet to start".to_string(),
            last_outcome: None,
            rounds_played: 0,
        }
    }

    /// Adds `amount` to the current bet. Valid only while betting; the
    /// accumulated bet can never exceed the balance.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        self.require_phase(Phase::Betting)?;
        self.bet = rules::validate_bet(self.balance, self.bet, amount)?;
        Ok(())
    }

    /// Resets the current bet to zero. Valid only while betting.
    pub fn clear_bet(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Betting)?;
        self.bet = 0;
        Ok(())
    }

    /// Locks the bet and starts the round: shuffles a fresh deck, deals two
    /// cards each (player and dealer alternating), hides the dealer hole
    /// card, and enters the player turn.
    ///
    /// # Errors
    ///
    /// [`GameError::NoBetPlaced`] if the current bet is zero;
    /// [`GameError::InvalidPhase`] outside the betting phase.
    pub fn confirm_bet(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Betting)?;
        if self.bet == 0 {
            return Err(GameError::NoBetPlaced);
        }
        self.deck.shuffle();
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        for _ in 0..2 {
            let c = self.draw();
            self.player_hand.add_card(c);
            let c = self.draw();
            self.dealer_hand.add_card(c);
        }
        self.dealer_hole_hidden = true;
        self.phase = Phase::PlayerTurn;
        self.message = "Your turn: Hit or Stand?".to_string();
        Ok(())
    }

    /// Draws one card into the player hand. A bust settles the round
    /// immediately as a dealer win; the dealer never plays.
    pub fn hit(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::PlayerTurn)?;
        let c = self.draw();
        self.player_hand.add_card(c);
        if self.player_hand.is_busted() {
            self.dealer_hole_hidden = false;
            self.settle();
        }
        Ok(())
    }

    /// Ends the player turn: reveals the dealer hole card, runs the dealer
    /// auto-play policy to completion, and settles. The whole dealer turn
    /// happens inside this call; no intermediate state is observable.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::PlayerTurn)?;
        self.dealer_hole_hidden = false;
        self.phase = Phase::DealerTurn;
        while rules::dealer_must_draw(&self.dealer_hand) {
            let c = self.draw();
            self.dealer_hand.add_card(c);
        }
        self.settle();
        Ok(())
    }

    /// Acknowledges a settled round and returns to betting. The bet resets
    /// to zero; balance and scoreboard persist.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::RoundOver)?;
        self.bet = 0;
        self.phase = Phase::Betting;
        self.message = "Place your bet to start".to_string();
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }
    pub fn player_value(&self) -> u32 {
        self.player_hand.value()
    }
    pub fn dealer_value(&self) -> u32 {
        self.dealer_hand.value()
    }

    /// True while the dealer's second card should render face down: from
    /// the deal until the player stands or busts.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.dealer_hole_hidden
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.score
    }

    /// Human-readable status line for the current phase or outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Outcome of the most recently settled round, if any.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Number of rounds settled so far this session.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    fn settle(&mut self) {
        let outcome = rules::judge_round(&self.player_hand, &self.dealer_hand);
        self.balance = rules::settle_balance(self.balance, self.bet, outcome);
        self.score.record(outcome);
        self.message = match outcome {
            Outcome::DealerWin if self.player_hand.is_busted() => "You busted! Dealer wins.",
            Outcome::PlayerWin if self.dealer_hand.is_busted() => "Dealer busted! You win!",
            Outcome::DealerWin => "Dealer wins!",
            Outcome::PlayerWin => "You win!",
            Outcome::Push => "Push! It's a tie.",
        }
        .to_string();
        self.last_outcome = Some(outcome);
        self.rounds_played += 1;
        self.phase = Phase::RoundOver;
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn draw(&mut self) -> Card {
        // a fresh 52-card deck always covers one legal round of draws
        self.deck.draw().expect("deck exhausted mid-round")
    }
}
