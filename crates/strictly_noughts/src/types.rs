//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Nought (moves first).
    #[strum(to_string = "O")]
    Nought,
    /// Cross (moves second).
    #[strum(to_string = "X")]
    Cross,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }

    /// Character drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Nought => 'O',
            Mark::Cross => 'X',
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell. Setting a cell to `Empty` unmakes a move.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Square {
    /// Character used by the text notation (`.` for empty).
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Marked(mark) => mark.symbol(),
        }
    }

    /// Parses a single character of the text notation.
    ///
    /// Accepts `x`/`X`, `o`/`O` (and `0` as a nought) plus `.`, `-` or `_`
    /// for an empty cell.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Square::Marked(Mark::Cross)),
            'o' | 'O' | '0' => Some(Square::Marked(Mark::Nought)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Marked(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Marked(mark)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A mark filled a row, column or diagonal.
    Won(Mark),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game can no longer continue.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
        assert_eq!(Mark::Cross.opponent().opponent(), Mark::Cross);
    }

    #[test]
    fn test_symbols_round_trip_through_notation() {
        for square in [Square::Empty, Mark::Nought.into(), Mark::Cross.into()] {
            assert_eq!(Square::from_symbol(square.symbol()), Some(square));
        }
        assert_eq!(Square::from_symbol('?'), None);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Cross.to_string(), "X");
        assert_eq!(Mark::Nought.to_string(), "O");
    }

    #[test]
    fn test_square_mark() {
        assert_eq!(Square::Empty.mark(), None);
        assert_eq!(Square::from(Mark::Cross).mark(), Some(Mark::Cross));
    }
}
