//! Command-line interface for strictly_beams.

use clap::{Parser, Subcommand};
use strictly_beams::Strategy;

/// Strictly Beams - turret-and-beam board game with computer opponents
#[derive(Parser, Debug)]
#[command(name = "strictly_beams")]
#[command(about = "Turret-and-beam board game with search-based opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on stdin/stdout
    Play {
        /// Path to a TOML host config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board side length
        #[arg(short, long)]
        size: Option<usize>,

        /// Computer strategy (random, greedy-win-in-1, avoid-immediate-loss, bounded-minimax)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Let the computer move first
        #[arg(long)]
        computer_first: bool,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two strategies against each other
    Duel {
        /// Strategy that moves first in the opening match
        #[arg(long, default_value = "random")]
        home: Strategy,

        /// The other strategy
        #[arg(long, default_value = "avoid-immediate-loss")]
        away: Strategy,

        /// Board side length
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Number of matches
        #[arg(short, long, default_value = "20")]
        games: u32,

        /// Swap who moves first after every match
        #[arg(long)]
        alternate: bool,

        /// Base seed for reproducible duels
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print Grundy numbers of empty boards
    Grundy {
        /// Smallest board side
        #[arg(long, default_value = "1")]
        from: usize,

        /// Largest board side (anything above 4 takes a very long time)
        #[arg(long, default_value = "3")]
        to: usize,
    },
}
