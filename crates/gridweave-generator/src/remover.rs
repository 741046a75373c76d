//! Cell removal.

use gridweave_core::{Board, Position, PositionSet};
use rand::Rng;

/// Empties exactly `count` distinct cells of `board`, chosen uniformly.
///
/// Row and column are drawn independently; a bitset of already-cleared
/// cells guards against clearing the same cell twice, which would
/// under-count the requested removal. Callers validate `count <= 81`.
pub(crate) fn clear_cells<R: Rng>(board: &mut Board, count: u8, rng: &mut R) {
    debug_assert!(count <= 81);
    let mut cleared = PositionSet::new();
    while cleared.len() < usize::from(count) {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if cleared.insert(pos) {
            board.set(pos, None);
        }
    }
}
