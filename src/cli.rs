//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exact minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side to play (x moves first); overrides the config file
        #[arg(long)]
        human: Option<Player>,
    },

    /// Print the optimal move for a board
    Solve {
        /// Board as nine squares, e.g. "XX.|OO.|..." (X, O, and . for empty)
        board: String,

        /// Emit the search result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    SelfPlay,
}
