//! Key normalisation and cursor movement for keyboard navigation.

use crate::game::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a terminal key event onto a game key.
///
/// Characters are lowercased. Ctrl+C and Esc read as `q` since raw mode
/// swallows the usual interrupt.
pub fn normalise(event: KeyEvent) -> Key {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Char('q'),
        KeyCode::Esc => Key::Char('q'),
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Other,
    }
}

/// Moves the cursor one cell on a `size`×`size` grid, stopping at the edges.
pub fn move_cursor(cursor: usize, size: usize, key: Key) -> usize {
    let (row, col) = (cursor / size, cursor % size);

    match key {
        Key::Right if col + 1 < size => cursor + 1,
        Key::Left if col > 0 => cursor - 1,
        Key::Down if row + 1 < size => cursor + size,
        Key::Up if row > 0 => cursor - size,
        _ => cursor,
    }
}
