//! Terminal session runner (default binary).
//!
//! Reads numeric menu commands from stdin and prints the queue and reserve
//! after each one. Logs go to stderr, filtered by `RUST_LOG`.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tetris_reserve::config::{Cli, SessionConfig};
use tetris_reserve::controller::{run, session_from_config};
use tetris_reserve::term::TerminalRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::from_env().merge_cli(&cli);

    let mut session = session_from_config(&config);
    let mut renderer = TerminalRenderer::new(config.color);
    let stdin = io::stdin();

    run(&mut session, stdin.lock(), &mut renderer, &config)?;
    Ok(())
}
