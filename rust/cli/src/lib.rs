//! # twentyone CLI Library
//!
//! Command-line interface for the twentyone blackjack engine. The engine
//! owns all game rules; this crate is the presentation layer. It parses
//! arguments and stdin commands, calls the engine's operations, and
//! renders its read-only state.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["twentyone", "deal", "--seed", "42"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive blackjack session over stdin
//! - `sim`: Batch auto-play with JSONL round records
//! - `stats`: Aggregate statistics from round-record files
//! - `deal`: Deal a single opening layout for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, TwentyoneCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["twentyone", "deal", "--seed", "42"];
/// let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    match TwentyoneCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first, then a short command listing
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "twentyone Blackjack CLI");
                    write_or_exit!(err, "Usage: twentyone <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: twentyone --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Play {
                    seed,
                    balance,
                    rounds,
                } => {
                    // Use stdin for real input (supports both TTY and piped stdin)
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_play_command(seed, balance, rounds, out, err, &mut stdin_lock)
                }
                Commands::Sim {
                    rounds,
                    bet,
                    seed,
                    balance,
                    output,
                } => handle_sim_command(rounds, bet, seed, balance, output, out, err),
                Commands::Stats { input } => handle_stats_command(input, out, err),
                Commands::Deal { seed } => handle_deal_command(seed, out),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration"));
    }

    #[test]
    fn test_deal_command_dispatch_with_seed() {
        let mut out = Vec::new();

        let result = handle_deal_command(Some(42), &mut out);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_cli_module_exports_commands_enum() {
        let cli = cli::TwentyoneCli::try_parse_from(["twentyone", "cfg"]).unwrap();
        match cli.cmd {
            Commands::Cfg => {}
            _ => panic!("Expected Commands::Cfg variant"),
        }
    }

    #[test]
    fn test_cli_types_preserve_all_5_subcommands() {
        let commands = vec![
            vec!["twentyone", "play"],
            vec!["twentyone", "sim", "--rounds", "1"],
            vec!["twentyone", "stats", "--input", "test.jsonl"],
            vec!["twentyone", "deal"],
            vec!["twentyone", "cfg"],
        ];

        // All should parse successfully
        for cmd_args in commands {
            let result = cli::TwentyoneCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_sim_requires_rounds_argument() {
        let result = cli::TwentyoneCli::try_parse_from(["twentyone", "sim"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_requires_input_argument() {
        let result = cli::TwentyoneCli::try_parse_from(["twentyone", "stats"]);
        assert!(result.is_err());
    }
}
