//! Strictly Noughts - noughts and crosses with an unbeatable opponent
//!
//! The crate has two parts:
//!
//! - **Board**: an N×N grid with move validation and win/draw detection
//! - **Search**: exhaustive minimax with alpha-beta pruning over a borrowed board
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Board, Mark, best_move};
//!
//! let mut board: Board = "XO./.X./...".parse().unwrap();
//! let cell = best_move(&mut board, Mark::Cross);
//! assert_eq!(cell, 8);
//!
//! board.set_cell(cell, Mark::Cross.into());
//! assert!(board.is_win(Mark::Cross));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod search;
mod types;

pub use board::Board;
pub use error::{MoveError, ParseBoardError};
pub use search::{
    SCORE_DRAW, SCORE_LOSE, SCORE_WIN, Outcome, Score, SearchReport, analyse, best_move,
};
pub use types::{GameStatus, Mark, Square};
