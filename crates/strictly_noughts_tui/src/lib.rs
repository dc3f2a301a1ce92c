//! Strictly Noughts terminal game
//!
//! Plays noughts and crosses in the terminal against the
//! [`strictly_noughts`] minimax opponent.
//!
//! # Architecture
//!
//! - **Game**: turn loop owning the board, generic over a [`Surface`]
//! - **Surface**: display/input seam; [`TerminalSurface`] is the ratatui one
//! - **Config**: TOML settings with CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod game;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, MarkArg};

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstMove, GameConfig};

// Crate-level exports - Game loop
pub use game::{Key, Message, Session, Surface, Tally, View};

// Crate-level exports - Terminal surface
pub use tui::{TerminalSurface, draw, move_cursor, normalise, required_area};
