//! Error types for board mutation and parsing.

/// Error returned by the checked board mutation.
///
/// The unchecked [`Board::set_cell`](crate::Board::set_cell) panics with
/// this error instead, since every call site is expected to validate first.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell on the board.
    #[display("Cell {index} is outside a board of {cells} cells")]
    OutOfRange {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// A mark was placed on a cell that already holds one.
    #[display("Cell {_0} is already occupied")]
    Occupied(usize),
}

impl std::error::Error for MoveError {}

/// Error returned when parsing a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {_0:?} in board")]
    InvalidSymbol(char),

    /// The number of cells is not the square of a supported board size.
    #[display("{_0} cells cannot form a square board of size 1 to {}", crate::Board::MAX_SIZE)]
    NotSquare(usize),
}

impl std::error::Error for ParseBoardError {}
