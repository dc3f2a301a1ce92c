//! Strictly Noughts - unified CLI
//!
//! Interactive terminal play and headless best-move queries.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_noughts::{Board, GameStatus, Mark, analyse};
use strictly_noughts_tui::{Cli, Command, GameConfig, Session, Surface, TerminalSurface};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { size, first } => {
            let mut config = config;
            if let Some(size) = size {
                config = config.with_board_size(size);
            }
            if let Some(first) = first {
                config = config.with_first(first);
            }
            config.validate()?;
            run_play(config)
        }
        Command::Suggest { board, mark, json } => {
            initialize_stderr_tracing(&config);
            run_suggest(&board, mark.into(), json)
        }
    }
}

/// Run the interactive terminal game
fn run_play(config: GameConfig) -> Result<()> {
    initialize_file_tracing(&config)?;
    info!(?config, "Starting Strictly Noughts");

    let surface = TerminalSurface::open(*config.board_size())?;
    let (width, height) = surface.required();

    let mut session = Session::new(Board::new(*config.board_size()), surface, *config.first());
    let result = session.run();

    // drop the surface before printing so output lands on the normal screen
    let surface = session.into_surface();
    let usable = surface.is_usable();
    drop(surface);

    let tally = result?;
    if !usable {
        eprintln!("Terminal size must be at least {}x{}", width, height);
    }
    println!(
        "Won {}, lost {}, drew {}, abandoned {}",
        tally.won, tally.lost, tally.drawn, tally.abandoned
    );

    Ok(())
}

/// Print the best move for a position
#[instrument(skip(notation))]
fn run_suggest(notation: &str, mark: Mark, json: bool) -> Result<()> {
    let mut board: Board = notation
        .parse()
        .with_context(|| format!("Failed to parse board {notation:?}"))?;

    let status = board.status();
    if status != GameStatus::InProgress {
        anyhow::bail!("Game is already over ({status:?}), no move to suggest");
    }

    let report = analyse(&mut board, mark);
    info!(?report, "Suggestion ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.best_move());
    }

    Ok(())
}

/// Sends tracing output to the configured log file so it cannot corrupt the TUI.
fn initialize_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

fn initialize_stderr_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
