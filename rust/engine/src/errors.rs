use thiserror::Error;

use crate::table::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}")]
    InvalidBetAmount { amount: u32 },
    #[error("Bet of {amount} exceeds available balance of {balance}")]
    InsufficientFunds { amount: u32, balance: u32 },
    #[error("No bet has been placed")]
    NoBetPlaced,
    #[error("Action requires the {expected:?} phase (currently {actual:?})")]
    InvalidPhase { expected: Phase, actual: Phase },
}
