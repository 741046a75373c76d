//! Placement legality predicates.
//!
//! All predicates are pure functions over a board snapshot: they answer
//! whether a digit may be placed without duplicating a value already in
//! the relevant row, column, or 3x3 box. They say nothing about whether
//! the resulting puzzle remains solvable.

use crate::{board::Board, digit::Digit, position::Position};

/// Returns `true` when `digit` does not yet occur anywhere in `row`.
///
/// # Panics
///
/// Panics if `row` is not in the range 0-8.
#[must_use]
pub fn row_admits(board: &Board, row: u8, digit: Digit) -> bool {
    board.row(row).all(|cell| cell != Some(digit))
}

/// Returns `true` when `digit` does not yet occur anywhere in `col`.
///
/// # Panics
///
/// Panics if `col` is not in the range 0-8.
#[must_use]
pub fn col_admits(board: &Board, col: u8, digit: Digit) -> bool {
    board.col(col).all(|cell| cell != Some(digit))
}

/// Returns `true` when `digit` does not yet occur in the 3x3 box whose
/// top-left corner is `origin`.
#[must_use]
pub fn box_admits(board: &Board, origin: Position, digit: Digit) -> bool {
    board.box_cells(origin).all(|cell| cell != Some(digit))
}

/// Returns `true` when placing `digit` at `pos` would leave the digit
/// unique within its row, column, and box.
///
/// The column is checked first, then the row, then the box, short-
/// circuiting on the first house that already holds the digit.
///
/// # Examples
///
/// ```
/// use gridweave_core::{Board, Digit, Position, rules};
///
/// let board: Board = format!("5{}", ".".repeat(80)).parse().unwrap();
/// let five = Digit::new(5).unwrap();
///
/// // 5 already occupies row 0, column 0, and the top-left box
/// assert!(!rules::placement_admits(&board, Position::new(0, 8), five));
/// assert!(!rules::placement_admits(&board, Position::new(8, 0), five));
/// assert!(!rules::placement_admits(&board, Position::new(2, 2), five));
/// assert!(rules::placement_admits(&board, Position::new(4, 4), five));
/// ```
#[must_use]
pub fn placement_admits(board: &Board, pos: Position, digit: Digit) -> bool {
    col_admits(board, pos.col, digit)
        && row_admits(board, pos.row, digit)
        && box_admits(board, pos.box_origin(), digit)
}
