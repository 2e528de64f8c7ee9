//! Strictly Minimax - console driver
//!
//! Plays, solves and self-plays tic-tac-toe with the exact engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_minimax::{Board, PlayConfig, driver};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, human } => run_play(config, human),
        Command::Solve { board, json } => run_solve(&board, json),
        Command::SelfPlay => {
            driver::self_play(io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run a human-versus-engine game on stdin/stdout
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    human: Option<strictly_minimax::Player>,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    let config = match human {
        Some(human) => config.with_human(human),
        None => config,
    };

    info!(human = %config.human(), engine = %config.engine(), "Starting console game");
    driver::play(&config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Solve a single board given on the command line
#[instrument]
fn run_solve(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    driver::solve(&board, json, io::stdout().lock())?;
    Ok(())
}
