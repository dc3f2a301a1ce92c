//! Command-line interface for strictly_noughts.

use crate::config::FirstMove;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_noughts::Mark;

/// Strictly Noughts - noughts and crosses against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Noughts and crosses against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "strictly_noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board side length, 1 to 3 (overrides config)
        #[arg(long)]
        size: Option<usize>,

        /// Who moves first (overrides config)
        #[arg(long, value_enum)]
        first: Option<FirstMove>,
    },

    /// Print the best move for a position
    Suggest {
        /// Board in row notation, e.g. "XO./.X./..." (X, O and . for empty)
        #[arg(short, long)]
        board: String,

        /// Mark to move
        #[arg(short, long, value_enum)]
        mark: MarkArg,

        /// Print the full search report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Mark accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::Cross,
            MarkArg::O => Mark::Nought,
        }
    }
}
