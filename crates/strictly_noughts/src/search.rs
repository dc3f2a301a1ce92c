//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Every line is played out to a win, loss or draw; there is no depth limit
//! and no static evaluation. Scores are biased by ply depth so the search
//! prefers the fastest win and the slowest loss.
//!
//! The search borrows the board mutably and explores by making a move,
//! scoring the subtree and unmaking the move again. The board is left
//! exactly as it was found.

use crate::board::Board;
use crate::types::{Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position from the searching side's point of view.
pub type Score = i8;

/// Base score of a won position, reduced by the depth it was reached at.
pub const SCORE_WIN: Score = Score::MAX;
/// Base score of a lost position, raised by the depth it was reached at.
pub const SCORE_LOSE: Score = Score::MIN;
/// Score of a drawn position.
pub const SCORE_DRAW: Score = 0;

/// Result class of a root score under optimal play from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The searching side can force a win.
    Win,
    /// Best play leads to a draw.
    Draw,
    /// The opponent can force a win.
    Loss,
}

impl Outcome {
    /// Classifies a score produced by the search.
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s > SCORE_DRAW => Outcome::Win,
            s if s < SCORE_DRAW => Outcome::Loss,
            _ => Outcome::Draw,
        }
    }
}

/// Best move plus statistics from one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Cell index of the chosen move.
    best_move: usize,
    /// Root score of the chosen move.
    score: Score,
    /// What the score means for the searching side.
    outcome: Outcome,
    /// Positions visited, root moves included.
    nodes: u64,
    /// Branches abandoned by alpha-beta cut-offs.
    cutoffs: u64,
}

/// Returns the cell index of the best move for `own`.
///
/// Candidate cells are tried in ascending order and a later cell only
/// replaces the current best on a strictly higher score, so ties go to the
/// lowest index.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn best_move(board: &mut Board, own: Mark) -> usize {
    analyse(board, own).best_move
}

/// Runs the same search as [`best_move`] and reports score and statistics.
///
/// # Panics
///
/// Panics if the board has no empty cell.
#[instrument(level = "debug", skip(board), fields(size = board.size()))]
pub fn analyse(board: &mut Board, own: Mark) -> SearchReport {
    let mut searcher = Searcher {
        board,
        own,
        other: own.opponent(),
        nodes: 0,
        cutoffs: 0,
    };

    let mut alpha = SCORE_LOSE;
    let beta = SCORE_WIN;
    let mut best = None;

    let moves: Vec<usize> = searcher.board.valid_moves(own.into()).collect();
    for cell in moves {
        searcher.nodes += 1;
        searcher.board.set_cell(cell, own.into());
        let score = searcher.minimise(1, alpha, beta);
        searcher.board.set_cell(cell, Square::Empty);

        if score > alpha {
            alpha = score;
            best = Some(cell);
        }
    }

    let Some(best_move) = best else {
        panic!("no legal move for {own}: the board is full");
    };

    let report = SearchReport {
        best_move,
        score: alpha,
        outcome: Outcome::from_score(alpha),
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
    };
    debug!(
        best_move,
        score = alpha,
        outcome = ?report.outcome,
        nodes = report.nodes,
        cutoffs = report.cutoffs,
        "Search complete"
    );
    report
}

/// Per-call search state. Lives for one top-level call only.
struct Searcher<'a> {
    board: &'a mut Board,
    own: Mark,
    other: Mark,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher<'_> {
    /// Opponent to move: picks the reply that is worst for `own`.
    fn minimise(&mut self, depth: Score, alpha: Score, mut beta: Score) -> Score {
        if self.board.is_win(self.other) {
            return SCORE_LOSE + depth;
        } else if self.board.is_draw() {
            return SCORE_DRAW;
        }

        let mark = Square::Marked(self.other);
        for cell in 0..self.board.cell_count() {
            if !self.board.is_valid_move(cell, mark) {
                continue;
            }

            self.nodes += 1;
            self.board.set_cell(cell, mark);
            let score = self.maximise(depth + 1, alpha, beta);
            self.board.set_cell(cell, Square::Empty);

            beta = beta.min(score);
            if beta <= alpha {
                self.cutoffs += 1;
                return alpha;
            }
        }

        beta
    }

    /// `own` to move: picks the reply that is best for `own`.
    fn maximise(&mut self, depth: Score, mut alpha: Score, beta: Score) -> Score {
        if self.board.is_win(self.own) {
            return SCORE_WIN - depth;
        } else if self.board.is_draw() {
            return SCORE_DRAW;
        }

        let mark = Square::Marked(self.own);
        for cell in 0..self.board.cell_count() {
            if !self.board.is_valid_move(cell, mark) {
                continue;
            }

            self.nodes += 1;
            self.board.set_cell(cell, mark);
            let score = self.minimise(depth + 1, alpha, beta);
            self.board.set_cell(cell, Square::Empty);

            alpha = alpha.max(score);
            if alpha >= beta {
                self.cutoffs += 1;
                return beta;
            }
        }

        alpha
    }
}
