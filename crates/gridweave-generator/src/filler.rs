//! Solved-board construction.
//!
//! A board is built in two phases: the three 3x3 boxes along the main
//! diagonal are seeded with random digits (they share no row or column,
//! so each can be filled independently), then the remaining cells are
//! completed by backtracking search in row-major order.

use gridweave_core::{Board, Digit, Position, rules};
use rand::Rng;

const DIAGONAL_BOX_ORIGINS: [Position; 3] = [
    Position::new(0, 0),
    Position::new(3, 3),
    Position::new(6, 6),
];

/// Builds a complete, rule-valid board, or `None` when the search
/// exhausts every digit choice (unreachable from a valid diagonal seed).
pub(crate) fn filled_board<R: Rng>(rng: &mut R) -> Option<Board> {
    let mut board = Board::new();
    seed_diagonal_boxes(&mut board, rng);
    complete(&mut board).then_some(board)
}

/// Fills the boxes at (0,0), (3,3), and (6,6) with random digits.
///
/// Each cell draws uniform digits until one is admissible against the
/// board so far; within a box that amounts to box-local uniqueness, so
/// the loop terminates after at most nine distinct draws per cell.
fn seed_diagonal_boxes<R: Rng>(board: &mut Board, rng: &mut R) {
    for origin in DIAGONAL_BOX_ORIGINS {
        for dr in 0..3 {
            for dc in 0..3 {
                let pos = Position::new(origin.row + dr, origin.col + dc);
                loop {
                    let digit = Digit::ALL[rng.random_range(0..9usize)];
                    if rules::placement_admits(board, pos, digit) {
                        board.set(pos, Some(digit));
                        break;
                    }
                }
            }
        }
    }
}

/// Completes every empty cell by backtracking, trying digits 1-9 in
/// ascending order at each cell.
///
/// The search runs over an explicit frame stack (one frame per empty
/// slot, holding the next digit value to try there), so its depth is
/// bounded by the 81-cell board rather than the call stack. Returns
/// `false` only when the first slot runs out of digits.
fn complete(board: &mut Board) -> bool {
    let slots: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| board[*pos].is_none())
        .collect();
    let mut next_digit = vec![1_u8; slots.len()];
    let mut depth = 0;

    while depth < slots.len() {
        let pos = slots[depth];
        let mut advanced = false;
        while next_digit[depth] <= 9 {
            let value = next_digit[depth];
            next_digit[depth] += 1;
            let digit = Digit::ALL[usize::from(value) - 1];
            if rules::placement_admits(board, pos, digit) {
                board.set(pos, Some(digit));
                depth += 1;
                advanced = true;
                break;
            }
        }
        if !advanced {
            // Dead end: rewind one slot and resume from its next digit.
            next_digit[depth] = 1;
            let Some(prev) = depth.checked_sub(1) else {
                return false;
            };
            depth = prev;
            board.set(slots[depth], None);
        }
    }
    true
}
