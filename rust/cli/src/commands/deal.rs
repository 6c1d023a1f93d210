//! # Deal Command
//!
//! Shuffles a fresh deck and deals one opening layout (two cards each,
//! both face up) for inspection. No betting, no play.

use crate::error::CliError;
use crate::formatters::format_hand;
use std::io::Write;
use twentyone_engine::deck::Deck;
use twentyone_engine::hand::Hand;

/// Handle the deal command: print one opening layout
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "deal: seed={}", seed)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut player = Hand::new();
    let mut dealer = Hand::new();
    for _ in 0..2 {
        player.add_card(deck.draw().ok_or("deck empty")?);
        dealer.add_card(deck.draw().ok_or("deck empty")?);
    }

    writeln!(
        out,
        "Dealer: {} ({})",
        format_hand(dealer.cards()),
        dealer.value()
    )?;
    writeln!(
        out,
        "Player: {} ({})",
        format_hand(player.cards()),
        player.value()
    )?;
    Ok(())
}
