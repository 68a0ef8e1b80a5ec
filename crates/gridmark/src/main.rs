//! Gridmark - terminal game for two players at one keyboard.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use gridmark::{Cli, Session, Settings};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    run(cli)
}

#[instrument(skip_all, fields(config = %cli.config.display()))]
fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.config)?;

    if let Some(size) = cli.size
        && !settings.allows_size(size)
    {
        bail!(
            "Board size {} is outside the allowed range ({})",
            size,
            settings.size_choices()
        );
    }

    info!(size = ?cli.size, "Starting session");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), settings)
        .with_size(cli.size);
    session.run()
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
