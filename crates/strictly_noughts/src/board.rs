//! Square noughts and crosses board.
//!
//! Cells are stored row-major in a flat vector: row `r` occupies indices
//! `r * size .. (r + 1) * size`. A mark wins by filling a whole row, column
//! or either diagonal, so the win length always equals the board size.

use crate::error::{MoveError, ParseBoardError};
use crate::types::{GameStatus, Mark, Square};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// N×N board of [`Square`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Square>,
}

impl Board {
    /// Largest supported side length.
    ///
    /// Search scores are `i8` and biased by ply depth, so the number of cells
    /// has to stay below `i8::MAX`.
    pub const MAX_SIZE: usize = 11;

    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`Board::MAX_SIZE`].
    #[instrument(level = "debug")]
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=Self::MAX_SIZE).contains(&size),
            "board size must be between 1 and {}, got {size}",
            Self::MAX_SIZE
        );
        Self {
            size,
            cells: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.cells
    }

    /// Clears every cell.
    #[instrument(level = "debug", skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Square::Empty);
    }

    /// Returns true if `square` may be written to `index`.
    ///
    /// Marks may only go on empty cells. Writing [`Square::Empty`] is valid
    /// for any in-range cell, which doubles as a bounds probe.
    pub fn is_valid_move(&self, index: usize, square: Square) -> bool {
        match self.cells.get(index) {
            Some(current) => square == Square::Empty || *current == Square::Empty,
            None => false,
        }
    }

    /// Writes `square` to `index` if the move is valid.
    pub fn try_set_cell(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let cells = self.cells.len();
        let current = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange { index, cells })?;
        if square != Square::Empty && *current != Square::Empty {
            return Err(MoveError::Occupied(index));
        }
        *current = square;
        Ok(())
    }

    /// Writes `square` to `index`, making (`Marked`) or unmaking (`Empty`) a move.
    ///
    /// # Panics
    ///
    /// Panics if [`Board::is_valid_move`] does not hold.
    pub fn set_cell(&mut self, index: usize, square: Square) {
        if let Err(err) = self.try_set_cell(index, square) {
            panic!("invalid board mutation: {err}");
        }
    }

    /// Returns the square at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.cells.get(index).copied()
    }

    /// Returns the square at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_cell(&self, index: usize) -> Square {
        match self.get(index) {
            Some(square) => square,
            None => panic!(
                "cell {index} is outside a board of {} cells",
                self.cells.len()
            ),
        }
    }

    /// Returns true if `mark` fills a row, a column or either diagonal.
    pub fn is_win(&self, mark: Mark) -> bool {
        let target = Square::Marked(mark);
        let n = self.size;

        // forward (\) then backward (/) diagonal
        if self.is_line(target, (0..n).map(|i| i * n + i))
            || self.is_line(target, (0..n).map(|i| (n - 1 - i) * n + i))
        {
            return true;
        }

        (0..n).any(|k| {
            self.is_line(target, (0..n).map(|i| k * n + i))
                || self.is_line(target, (0..n).map(|i| k + n * i))
        })
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&square| square != Square::Empty)
    }

    /// Returns true if the board is full and neither mark has won.
    ///
    /// A full board containing a win is not a draw.
    pub fn is_draw(&self) -> bool {
        !Mark::iter().any(|mark| self.is_win(mark)) && self.is_full()
    }

    /// Classifies the position.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = Mark::iter().find(|&mark| self.is_win(mark)) {
            GameStatus::Won(mark)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Cells where `square` may be written, in ascending order.
    pub fn valid_moves(&self, square: Square) -> impl Iterator<Item = usize> + '_ {
        (0..self.cells.len()).filter(move |&index| self.is_valid_move(index, square))
    }

    fn is_line(&self, target: Square, mut indices: impl Iterator<Item = usize>) -> bool {
        indices.all(|index| self.cells[index] == target)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Rows of `X`, `O` and `.` separated by newlines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in cells {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) notation.
///
/// Whitespace, `/` and `|` are separators and ignored, so `"XO./.X./..O"`
/// and a multi-line grid parse the same. The size is inferred from the
/// number of cells.
impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| Square::from_symbol(c).ok_or(ParseBoardError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let size = (1..=Self::MAX_SIZE)
            .find(|n| n * n == cells.len())
            .ok_or(ParseBoardError::NotSquare(cells.len()))?;

        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Marked(Mark::Cross);
    const O: Square = Square::Marked(Mark::Nought);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.cell_count(), 9);
        assert!(board.squares().iter().all(|&s| s == Square::Empty));
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    #[should_panic(expected = "board size")]
    fn test_zero_size_panics() {
        Board::new(0);
    }

    #[test]
    fn test_valid_move_rules() {
        let mut board = Board::new(3);
        board.set_cell(4, X);

        assert!(!board.is_valid_move(4, O));
        assert!(board.is_valid_move(4, Square::Empty));
        assert!(board.is_valid_move(0, O));
        assert!(!board.is_valid_move(9, Square::Empty));
    }

    #[test]
    fn test_try_set_cell_errors() {
        let mut board = Board::new(3);
        board.set_cell(0, O);

        assert_eq!(board.try_set_cell(0, X), Err(MoveError::Occupied(0)));
        assert_eq!(
            board.try_set_cell(12, X),
            Err(MoveError::OutOfRange { index: 12, cells: 9 })
        );
        assert_eq!(board.get_cell(0), O);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_set_cell_on_occupied_panics() {
        let mut board = Board::new(3);
        board.set_cell(2, X);
        board.set_cell(2, O);
    }

    #[test]
    fn test_win_lines_on_four_by_four() {
        let n = 4;
        let lines: Vec<Vec<usize>> = (0..n)
            .map(|r| (0..n).map(|i| r * n + i).collect())
            .chain((0..n).map(|c| (0..n).map(|i| c + n * i).collect()))
            .chain([
                (0..n).map(|i| i * n + i).collect(),
                (0..n).map(|i| (n - 1 - i) * n + i).collect(),
            ])
            .collect();

        for line in lines {
            let mut board = Board::new(n);
            for &index in &line {
                assert!(!board.is_win(Mark::Cross));
                board.set_cell(index, X);
            }
            assert!(board.is_win(Mark::Cross), "line {line:?}");
            assert!(!board.is_win(Mark::Nought));
        }
    }

    #[test]
    fn test_one_by_one_board() {
        let mut board = Board::new(1);
        board.set_cell(0, O);
        assert!(board.is_win(Mark::Nought));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?".parse::<Board>(),
            Err(ParseBoardError::InvalidSymbol('?'))
        );
        assert_eq!("XO..".parse::<Board>().unwrap().size(), 2);
        assert_eq!("XO...".parse::<Board>(), Err(ParseBoardError::NotSquare(5)));
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::NotSquare(0)));
    }

    #[test]
    fn test_valid_moves_ascending() {
        let board: Board = "X.O/.O./X..".parse().unwrap();
        let moves: Vec<_> = board.valid_moves(X).collect();
        assert_eq!(moves, vec![1, 3, 5, 7, 8]);
    }
}
