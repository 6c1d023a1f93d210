//! # Stats Command
//!
//! Aggregates a JSONL round-record file into a summary: outcome totals,
//! total wagered, and the balance after the last recorded round. Malformed
//! lines are reported as warnings and skipped.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::parse_json_or_continue;
use std::io::Write;
use twentyone_engine::logger::RoundRecord;
use twentyone_engine::rules::Outcome;

/// Handle the stats command: summarize a round-record file
///
/// # Arguments
///
/// * `input` - Path to a JSONL round-record file (plain or .zst)
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for per-line warnings
///
/// # Returns
///
/// `Err(CliError)` when the file cannot be read or contains no valid
/// records; `Ok(())` otherwise.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input)
        .map_err(|e| CliError::InvalidInput(format!("failed to read {}: {}", input, e)))?;

    let mut total = 0u64;
    let (mut wins, mut losses, mut pushes) = (0u64, 0u64, 0u64);
    let mut total_wagered = 0u64;
    let mut last_balance = None;

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: RoundRecord = parse_json_or_continue!(line, err, format!("line {}", idx + 1));
        total += 1;
        match record.outcome {
            Outcome::PlayerWin => wins += 1,
            Outcome::DealerWin => losses += 1,
            Outcome::Push => pushes += 1,
        }
        total_wagered += u64::from(record.bet);
        last_balance = Some(record.balance_after);
    }

    if total == 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid round records found in {}",
            input
        )));
    }

    writeln!(out, "Rounds: {}", total)?;
    writeln!(
        out,
        "Player: {} wins / {} losses / {} pushes",
        wins, losses, pushes
    )?;
    writeln!(out, "Total wagered: {}", total_wagered)?;
    if let Some(balance) = last_balance {
        writeln!(out, "Final balance: {}", balance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_file_errors() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_empty_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        std::fs::write(&path, "").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_str().unwrap().to_string(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_stats_skips_malformed_lines_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.jsonl");
        let valid = concat!(
            "{\"round_id\":\"20250408-000001\",\"seed\":1,\"bet\":50,",
            "\"outcome\":\"PlayerWin\",\"player_cards\":[],\"dealer_cards\":[],",
            "\"player_value\":20,\"dealer_value\":19,\"balance_after\":1050}"
        );
        std::fs::write(&path, format!("{}\nnot json\n", valid)).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_str().unwrap().to_string(), &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Rounds: 1"));
        assert!(output.contains("Player: 1 wins / 0 losses / 0 pushes"));
        assert!(output.contains("Total wagered: 50"));
        assert!(output.contains("Final balance: 1050"));

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Failed to parse line 2"));
    }
}
