//! Tests for board win and draw detection.

use strictly_noughts::{Board, GameStatus, Mark, Square};

fn board(notation: &str) -> Board {
    notation.parse().unwrap()
}

#[test]
fn test_every_row_column_and_diagonal_wins() {
    let lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for line in lines {
        let mut board = Board::new(3);
        for index in line {
            board.set_cell(index, Mark::Nought.into());
        }
        assert!(board.is_win(Mark::Nought), "line {line:?}");
        assert!(!board.is_win(Mark::Cross));
        assert_eq!(board.status(), GameStatus::Won(Mark::Nought));
    }
}

#[test]
fn test_mixed_line_is_not_a_win() {
    let b = board("XXO/.../...");
    assert!(!b.is_win(Mark::Cross));
    assert!(!b.is_win(Mark::Nought));
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(b.is_full());
    assert!(b.is_draw());
    assert_eq!(b.status(), GameStatus::Draw);
}

#[test]
fn test_full_board_with_winner_is_not_draw() {
    let b = board("XXX/OOX/XOO");
    assert!(b.is_full());
    assert!(b.is_win(Mark::Cross));
    assert!(!b.is_draw());
    assert_eq!(b.status(), GameStatus::Won(Mark::Cross));
}

#[test]
fn test_partial_board_is_not_draw() {
    let b = board("XO./.../...");
    assert!(!b.is_draw());
    assert_eq!(b.status(), GameStatus::InProgress);
}

#[test]
fn test_make_then_unmake_restores_board() {
    let mut b = board("X.O/.O./X..");
    let before = b.clone();

    for index in 0..b.cell_count() {
        if b.is_valid_move(index, Mark::Cross.into()) {
            b.set_cell(index, Mark::Cross.into());
            assert_ne!(b, before);
            b.set_cell(index, Square::Empty);
            assert_eq!(b, before);
        }
    }
}

#[test]
fn test_reset_clears_marks() {
    let mut b = board("XOX/XOO/OXX");
    b.reset();
    assert_eq!(b, Board::new(3));
    assert_eq!(b.size(), 3);
}

#[test]
fn test_get_cell_reads_without_mutating() {
    let b = board("X.O/.../...");
    assert_eq!(b.get_cell(0), Square::Marked(Mark::Cross));
    assert_eq!(b.get_cell(1), Square::Empty);
    assert_eq!(b.get_cell(2), Square::Marked(Mark::Nought));
    assert_eq!(b.get(9), None);
}

#[test]
#[should_panic(expected = "outside a board")]
fn test_get_cell_out_of_range_panics() {
    Board::new(3).get_cell(9);
}
