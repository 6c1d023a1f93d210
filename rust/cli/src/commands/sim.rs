//! # Sim Command
//!
//! Non-interactive batch play for generating round histories.
//!
//! Plays a fixed number of rounds with a fixed wager and a fixed-threshold
//! player policy (hit below 17, mirroring the dealer), optionally writing
//! one JSONL round record per settled round. The run stops early when the
//! balance can no longer cover the wager.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use twentyone_engine::logger::{RoundLogger, RoundRecord};
use twentyone_engine::rules::{Outcome, DEALER_STAND_MIN};
use twentyone_engine::table::{Phase, Table};

/// Handle the sim command: automated blackjack rounds with record output
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `bet` - Fixed wager per round (must be >= 1)
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `balance` - Starting balance (default: from configuration)
/// * `output` - Optional JSONL file for round records
/// * `out` - Output stream for the summary
/// * `err` - Error stream for warnings
pub fn handle_sim_command(
    rounds: u32,
    bet: u32,
    seed: Option<u64>,
    balance: Option<u32>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if bet == 0 {
        return Err(CliError::InvalidInput("bet must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let starting_balance = balance.unwrap_or(cfg.starting_balance);

    writeln!(
        out,
        "sim: rounds={} bet={} seed={} balance={}",
        rounds, bet, seed, starting_balance
    )?;

    let mut logger = match &output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut table = Table::new(Some(seed), starting_balance);
    let mut completed = 0u32;
    let (mut wins, mut losses, mut pushes) = (0u32, 0u32, 0u32);

    for _ in 0..rounds {
        if table.place_bet(bet).is_err() {
            ui::display_warning(err, "balance cannot cover the bet; stopping early")?;
            break;
        }
        table.confirm_bet()?;
        play_out_round(&mut table)?;

        let outcome = table
            .last_outcome()
            .ok_or_else(|| CliError::Engine("round did not settle".to_string()))?;
        match outcome {
            Outcome::PlayerWin => wins += 1,
            Outcome::DealerWin => losses += 1,
            Outcome::Push => pushes += 1,
        }
        completed += 1;

        if let Some(logger) = &mut logger {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(seed),
                bet: table.bet(),
                outcome,
                player_cards: table.player_hand().cards().to_vec(),
                dealer_cards: table.dealer_hand().cards().to_vec(),
                player_value: table.player_value(),
                dealer_value: table.dealer_value(),
                balance_after: table.balance(),
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }

        table.play_again()?;
    }

    let net = i64::from(table.balance()) - i64::from(starting_balance);
    writeln!(out, "Rounds completed: {}", completed)?;
    writeln!(
        out,
        "Player record: {} wins / {} losses / {} pushes",
        wins, losses, pushes
    )?;
    writeln!(out, "Final balance: {} (net {:+})", table.balance(), net)?;
    Ok(())
}

/// Fixed-threshold player policy: hit below the dealer's own stand line.
fn play_out_round(table: &mut Table) -> Result<(), CliError> {
    while table.phase() == Phase::PlayerTurn && table.player_value() < DEALER_STAND_MIN {
        table.hit()?;
    }
    if table.phase() == Phase::PlayerTurn {
        table.stand()?;
    }
    Ok(())
}
