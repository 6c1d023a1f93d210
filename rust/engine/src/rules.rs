use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

/// The dealer stands at or above this total. Fixed threshold; no soft/hard
/// distinction and no reaction to the player's hand.
pub const DEALER_STAND_MIN: u32 = 17;

/// Terminal result of a round from the table's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Push,
}

/// House drawing policy: the dealer keeps drawing while under the stand
/// threshold, and stops the moment the hand reaches it (standing or busted).
pub fn dealer_must_draw(hand: &Hand) -> bool {
    hand.value() < DEALER_STAND_MIN
}

/// Settlement table applied once per round.
///
/// A player bust is checked first: it loses even when the dealer would have
/// busted too (the dealer never plays after a player bust). A two-card 21
/// gets no special treatment over any other 21.
pub fn judge_round(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_busted() {
        return Outcome::DealerWin;
    }
    if dealer.is_busted() {
        return Outcome::PlayerWin;
    }
    let player_value = player.value();
    let dealer_value = dealer.value();
    if dealer_value > player_value {
        Outcome::DealerWin
    } else if player_value > dealer_value {
        Outcome::PlayerWin
    } else {
        Outcome::Push
    }
}

/// Applies the wager delta for a settled round: wins pay the bet, losses
/// forfeit it, pushes leave the balance alone. The betting phase keeps
/// `bet <= balance`, so the subtraction cannot underflow.
pub fn settle_balance(balance: u32, bet: u32, outcome: Outcome) -> u32 {
    match outcome {
        Outcome::PlayerWin => balance + bet,
        Outcome::DealerWin => balance - bet,
        Outcome::Push => balance,
    }
}

/// Validates one bet increment against the current balance.
///
/// Bets accumulate: each call adds `amount` to `current_bet`. Returns the
/// new total on success.
///
/// # Errors
///
/// - [`GameError::InvalidBetAmount`] - `amount` is zero (or overflows)
/// - [`GameError::InsufficientFunds`] - the accumulated bet would exceed
///   the balance
///
/// # Examples
///
/// ```
/// use twentyone_engine::rules::validate_bet;
/// use twentyone_engine::errors::GameError;
///
/// assert_eq!(validate_bet(1000, 50, 25), Ok(75));
/// assert!(matches!(
///     validate_bet(100, 80, 30),
///     Err(GameError::InsufficientFunds { .. })
/// ));
/// ```
pub fn validate_bet(balance: u32, current_bet: u32, amount: u32) -> Result<u32, GameError> {
    if amount == 0 {
        return Err(GameError::InvalidBetAmount { amount });
    }
    let total = current_bet
        .checked_add(amount)
        .ok_or(GameError::InvalidBetAmount { amount })?;
    if total > balance {
        return Err(GameError::InsufficientFunds { amount, balance });
    }
    Ok(total)
}
