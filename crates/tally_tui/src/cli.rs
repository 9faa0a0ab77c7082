//! Command-line interface for tally.

use clap::Parser;
use std::path::PathBuf;

/// Tally - two-player tic-tac-toe with a running score
#[derive(Parser, Debug, Default)]
#[command(name = "tally")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name for player 1 (plays X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name for player 2 (plays O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the final session as JSON on exit
    #[arg(long)]
    pub summary: bool,
}
