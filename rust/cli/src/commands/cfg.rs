//! # Cfg Command
//!
//! Prints the resolved configuration along with where each value came from
//! (default, file, or env).

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command: display configuration with provenance
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  starting_balance = {} ({})",
        cfg.starting_balance,
        sources.starting_balance.as_str()
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed = {} ({})", seed, sources.seed.as_str())?,
        None => writeln!(out, "  seed = none ({})", sources.seed.as_str())?,
    }
    Ok(())
}
