//! clap argument types for the twentyone CLI.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "twentyone", version, about = "Blackjack at the terminal")]
pub struct TwentyoneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play an interactive session
    Play {
        /// RNG seed for a reproducible session (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance in chips (default: from configuration)
        #[arg(long)]
        balance: Option<u32>,
        /// Stop after this many settled rounds (default: until quit)
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Simulate rounds with a fixed policy and record them
    Sim {
        /// Number of rounds to play
        #[arg(long)]
        rounds: u32,
        /// Fixed wager per round
        #[arg(long, default_value_t = 50)]
        bet: u32,
        /// RNG seed for a reproducible run (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance in chips (default: from configuration)
        #[arg(long)]
        balance: Option<u32>,
        /// Write round records to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a round-record file
    Stats {
        /// JSONL round-record file (plain or .zst)
        #[arg(long)]
        input: String,
    },
    /// Deal one opening layout for inspection
    Deal {
        /// RNG seed (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration
    Cfg,
}
