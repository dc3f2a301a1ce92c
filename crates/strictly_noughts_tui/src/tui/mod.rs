//! Terminal surface built on ratatui and crossterm.

mod input;
mod ui;

pub use input::{move_cursor, normalise};
pub use ui::{draw, required_area};

use crate::game::{Key, Surface, View};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument};

/// Full-screen terminal surface. Restores the terminal on drop.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    required: (u16, u16),
}

impl TerminalSurface {
    /// Switches the terminal to raw mode on the alternate screen.
    ///
    /// Fails without touching the terminal if it is smaller than
    /// [`required_area`] for `board_size`.
    #[instrument]
    pub fn open(board_size: usize) -> Result<Self> {
        let required = required_area(board_size);
        if !fits(required) {
            anyhow::bail!(
                "Terminal size must be at least {}x{}",
                required.0,
                required.1
            );
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore();
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore();
                return Err(e.into());
            }
        };

        // leave the terminal usable if the search or a draw panics
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic| {
            restore();
            hook(panic);
        }));

        info!(width = required.0, height = required.1, "Terminal surface opened");
        Ok(Self { terminal, required })
    }

    /// Smallest usable terminal as (columns, rows).
    pub fn required(&self) -> (u16, u16) {
        self.required
    }
}

impl Surface for TerminalSurface {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let key = normalise(key);
                    debug!(?key, "Key pressed");
                    return Ok(key);
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    return Ok(Key::Resize);
                }
                _ => {}
            }
        }
    }

    fn draw(&mut self, view: &View<'_>) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, view))?;
        Ok(())
    }

    fn is_usable(&self) -> bool {
        fits(self.required)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore();
    }
}

fn fits((width, height): (u16, u16)) -> bool {
    terminal::size()
        .map(|(cols, rows)| cols >= width && rows >= height)
        .unwrap_or(false)
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
