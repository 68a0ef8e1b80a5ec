//! Command-line interface for gridmark.

use clap::Parser;
use std::path::PathBuf;

/// Gridmark - two-player k-in-a-row on a square board
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Play tic-tac-toe and its larger cousins in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size; skips the size prompt
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = "gridmark.toml")]
    pub config: PathBuf,
}
