//! # Play Command
//!
//! Interactive blackjack at the terminal.
//!
//! The loop reads one command per line from stdin and applies it to the
//! engine table. Which commands make sense depends on the table's phase, so
//! the prompt changes with it: betting commands while betting, hit/stand
//! during the player turn, again once the round is settled. Rejected
//! commands print the engine's reason and change nothing.
//!
//! The session ends on `q`, EOF, a completed `--rounds` limit, or a balance
//! that can no longer cover any bet.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_dealer_hand, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_table_command, ParseResult, TableCommand};
use std::io::{BufRead, Write};
use twentyone_engine::table::{Phase, Table};

/// Handle the play command: interactive blackjack gameplay
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `balance` - Starting balance (default: from configuration)
/// * `rounds` - Stop after this many settled rounds (default: until quit)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for table commands
///
/// # Returns
///
/// * `Ok(())` on successful completion
/// * `Err(CliError)` if parameters are invalid or I/O errors occur
pub fn handle_play_command(
    seed: Option<u64>,
    balance: Option<u32>,
    rounds: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let balance = balance.unwrap_or(cfg.starting_balance);
    if balance == 0 {
        ui::write_error(err, "balance must be >= 1")?;
        return Err(CliError::InvalidInput("balance must be >= 1".to_string()));
    }

    writeln!(out, "play: seed={} balance={}", seed, balance)?;

    let mut table = Table::new(Some(seed), balance);
    writeln!(out, "{}", table.message())?;

    loop {
        if let Some(limit) = rounds
            && table.rounds_played() >= limit
        {
            writeln!(out, "Round limit reached.")?;
            break;
        }
        if table.phase() == Phase::Betting && table.balance() == 0 {
            ui::display_warning(err, "balance exhausted; no further bets possible")?;
            break;
        }

        write!(out, "{}", prompt_for(table.phase()))?;
        out.flush()?;

        match read_stdin_line(stdin) {
            None => break,
            Some(input) => match parse_table_command(&input) {
                ParseResult::Quit => break,
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                ParseResult::Command(cmd) => apply_command(&mut table, cmd, out, err)?,
            },
        }
    }

    let score = table.scoreboard();
    writeln!(out, "Rounds played: {}", table.rounds_played())?;
    writeln!(
        out,
        "Record: {} wins / {} losses ({} dealer wins / {} dealer losses)",
        score.player_wins, score.player_losses, score.dealer_wins, score.dealer_losses
    )?;
    writeln!(out, "Final balance: {}", table.balance())?;
    Ok(())
}

fn prompt_for(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Enter bet command (bet <amount>/clear/deal/q): ",
        Phase::PlayerTurn => "Enter action (hit/stand/q): ",
        // DealerTurn is never observable between commands
        Phase::DealerTurn | Phase::RoundOver => "Enter command (again/q): ",
    }
}

/// Applies one parsed command; rejections are reported and leave the table
/// unchanged, successes redraw the relevant part of the table.
fn apply_command(
    table: &mut Table,
    cmd: TableCommand,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let result = match cmd {
        TableCommand::Bet(amount) => table.place_bet(amount),
        TableCommand::Clear => table.clear_bet(),
        TableCommand::Deal => table.confirm_bet(),
        TableCommand::Hit => table.hit(),
        TableCommand::Stand => table.stand(),
        TableCommand::Again => table.play_again(),
    };
    match result {
        Err(e) => ui::write_error(err, &e.to_string())?,
        Ok(()) => render_table(table, out)?,
    }
    Ok(())
}

fn render_table(table: &Table, out: &mut dyn Write) -> Result<(), CliError> {
    match table.phase() {
        Phase::Betting => {
            writeln!(
                out,
                "Balance: {}  Current bet: {}",
                table.balance(),
                table.bet()
            )?;
        }
        Phase::PlayerTurn => {
            writeln!(
                out,
                "Dealer: {}",
                format_dealer_hand(table.dealer_hand().cards(), table.dealer_hole_hidden())
            )?;
            writeln!(
                out,
                "Player: {} ({})",
                format_hand(table.player_hand().cards()),
                table.player_value()
            )?;
        }
        Phase::DealerTurn | Phase::RoundOver => {
            writeln!(
                out,
                "Dealer: {} ({})",
                format_hand(table.dealer_hand().cards()),
                table.dealer_value()
            )?;
            writeln!(
                out,
                "Player: {} ({})",
                format_hand(table.player_hand().cards()),
                table.player_value()
            )?;
            writeln!(out, "{}", table.message())?;
            writeln!(out, "Balance: {}", table.balance())?;
        }
    }
    Ok(())
}
