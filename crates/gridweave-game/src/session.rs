//! The play session aggregate.

use gridweave_core::{Board, Digit, Direction, Position};
use gridweave_generator::{Difficulty, GeneratedPuzzle, GeneratorError, PuzzleGenerator};

use crate::sketch::SketchMarks;

/// Outcome of a write attempt on the live board.
///
/// A rejected write is a normal, expected event (the player pressed a
/// key over a given cell), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementOutcome {
    /// The digit was written to the live board.
    Applied,
    /// The cell does not accept player input; nothing changed.
    NotPermitted,
}

/// Outcome of toggling a sketch mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SketchOutcome {
    /// The digit was added to the cell's marks.
    Added,
    /// The digit was already marked and has been removed.
    Removed,
    /// The cell is not a sketch target; nothing changed.
    NotPermitted,
}

/// A Sudoku play session.
///
/// Owns three independent boards created together at generation time:
///
/// - `solved` — the completed board, the ground truth for win detection;
/// - `original` — the puzzle as presented, distinguishing given cells
///   from player-editable ones;
/// - `live` — the board the player edits.
///
/// `live` is the only board that changes after construction, and only at
/// player-editable positions; the other two are never aliased by it, so
/// no edit can leak between them. Alongside the boards the session
/// tracks per-cell [`SketchMarks`] and the transient cursor selection.
///
/// # Examples
///
/// ```
/// use gridweave_game::Session;
/// use gridweave_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let puzzle = PuzzleGenerator::for_difficulty(Difficulty::Easy)
///     .generate_with_seed(PuzzleSeed::from_phrase("docs"))
///     .unwrap();
/// let session = Session::new(puzzle);
///
/// assert_eq!(session.live().count_empty(), 30);
/// assert!(!session.is_won());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    solved: Board,
    original: Board,
    live: Board,
    sketches: [SketchMarks; 81],
    selection: Option<Position>,
}

impl Session {
    /// Creates a session from a generated puzzle.
    ///
    /// The puzzle board becomes `original`, `live` starts as a copy of
    /// it, and the solution is kept as the win-detection ground truth.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            solution,
            seed: _,
        } = puzzle;
        Self {
            solved: solution,
            live: puzzle.clone(),
            original: puzzle,
            sketches: std::array::from_fn(|_| SketchMarks::new()),
            selection: None,
        }
    }

    /// Generates a fresh session with `removed_cells` cells emptied.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRemovedCells`] when the count
    /// exceeds the board, or [`GeneratorError::Unfillable`] if board
    /// completion fails (unreachable for the standard configuration).
    pub fn generate(removed_cells: u8) -> Result<Self, GeneratorError> {
        Ok(Self::new(PuzzleGenerator::new(removed_cells)?.generate()?))
    }

    /// Generates a fresh session at a difficulty preset.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unfillable`] if board completion fails
    /// (unreachable for the standard configuration).
    pub fn for_difficulty(difficulty: Difficulty) -> Result<Self, GeneratorError> {
        Ok(Self::new(
            PuzzleGenerator::for_difficulty(difficulty).generate()?,
        ))
    }

    /// Returns the completed solution board.
    #[must_use]
    pub fn solved(&self) -> &Board {
        &self.solved
    }

    /// Returns the puzzle as originally presented.
    #[must_use]
    pub fn original(&self) -> &Board {
        &self.original
    }

    /// Returns the board the player is editing.
    #[must_use]
    pub fn live(&self) -> &Board {
        &self.live
    }

    /// Returns `true` when the cell at `pos` accepts player input.
    ///
    /// A cell is editable exactly when it was emptied during puzzle
    /// generation; given cells stay read-only for the session's
    /// lifetime.
    #[must_use]
    pub fn is_editable(&self, pos: Position) -> bool {
        self.original[pos].is_none()
    }

    /// Writes `digit` into the live board at `pos`.
    ///
    /// Editable cells accept the write (replacing any previous player
    /// digit) and have their sketch marks cleared; given cells report
    /// [`PlacementOutcome::NotPermitted`] and nothing changes.
    pub fn place(&mut self, pos: Position, digit: Digit) -> PlacementOutcome {
        if !self.is_editable(pos) {
            return PlacementOutcome::NotPermitted;
        }
        self.live.set(pos, Some(digit));
        self.sketches[pos.index()].clear();
        PlacementOutcome::Applied
    }

    /// Returns the sketch marks on the cell at `pos`.
    #[must_use]
    pub fn sketch(&self, pos: Position) -> &SketchMarks {
        &self.sketches[pos.index()]
    }

    /// Toggles a sketch mark on the cell at `pos`.
    ///
    /// Only cells that are empty in the live board are sketch targets;
    /// an empty live cell is necessarily player-editable, since given
    /// cells carry their digit for the whole session.
    pub fn toggle_sketch(&mut self, pos: Position, digit: Digit) -> SketchOutcome {
        if self.live[pos].is_some() {
            return SketchOutcome::NotPermitted;
        }
        if self.sketches[pos.index()].toggle(digit) {
            SketchOutcome::Added
        } else {
            SketchOutcome::Removed
        }
    }

    /// Commits the most recently added sketch mark at `pos` into the
    /// live board and clears the cell's marks.
    ///
    /// Reports [`PlacementOutcome::NotPermitted`] when the cell already
    /// holds a digit or has no marks to commit.
    pub fn commit_sketch(&mut self, pos: Position) -> PlacementOutcome {
        if self.live[pos].is_some() {
            return PlacementOutcome::NotPermitted;
        }
        let Some(digit) = self.sketches[pos.index()].last() else {
            return PlacementOutcome::NotPermitted;
        };
        self.live.set(pos, Some(digit));
        self.sketches[pos.index()].clear();
        PlacementOutcome::Applied
    }

    /// Removes all sketch marks from the cell at `pos`.
    pub fn clear_sketch(&mut self, pos: Position) {
        self.sketches[pos.index()].clear();
    }

    /// Returns the first cell strictly beyond `from` in `direction`
    /// that is empty on the live board, or `None` when the scan reaches
    /// the board edge first.
    ///
    /// Emptiness is the only criterion; callers that care about
    /// editability combine this with [`Session::is_editable`].
    #[must_use]
    pub fn next_vacant(&self, from: Position, direction: Direction) -> Option<Position> {
        let mut pos = from;
        while let Some(next) = pos.step(direction) {
            if self.live[next].is_none() {
                return Some(next);
            }
            pos = next;
        }
        None
    }

    /// Returns `true` when every cell of the live board holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.live.is_full()
    }

    /// Returns `true` when the live board matches the solution
    /// cell-for-cell.
    ///
    /// A full board that is not won is a loss state; a board that is not
    /// full can never be won, since empty cells match nothing in the
    /// solution.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.live == self.solved
    }

    /// Restores the session to its initial state: the live board becomes
    /// a fresh copy of `original`, all sketch marks are dropped, and the
    /// selection is cleared.
    ///
    /// The puzzle itself is unchanged; `solved` and `original` are not
    /// regenerated.
    pub fn reset(&mut self) {
        self.live = self.original.clone();
        for marks in &mut self.sketches {
            marks.clear();
        }
        self.selection = None;
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Moves the selection cursor to `pos`.
    pub fn select(&mut self, pos: Position) {
        self.selection = Some(pos);
    }

    /// Clears the selection cursor.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use gridweave_generator::PuzzleSeed;

    use super::*;

    fn session(phrase: &str, removed_cells: u8) -> Session {
        let generator = PuzzleGenerator::new(removed_cells).expect("valid removal count");
        let puzzle = generator
            .generate_with_seed(PuzzleSeed::from_phrase(phrase))
            .expect("generation succeeds");
        Session::new(puzzle)
    }

    fn first_editable(session: &Session) -> Position {
        Position::ALL
            .into_iter()
            .find(|&pos| session.is_editable(pos))
            .expect("puzzle has editable cells")
    }

    fn wrong_digit(session: &Session, pos: Position) -> Digit {
        let correct = session.solved()[pos].expect("solution is complete");
        Digit::ALL
            .into_iter()
            .find(|&d| d != correct)
            .expect("more than one digit exists")
    }

    #[test]
    fn test_editable_exactly_where_cells_were_removed() {
        let session = session("editable cells", 40);
        for pos in Position::ALL {
            assert_eq!(session.is_editable(pos), session.original()[pos].is_none());
        }
        let editable = Position::ALL
            .into_iter()
            .filter(|&pos| session.is_editable(pos))
            .count();
        assert_eq!(editable, 40);
    }

    #[test]
    fn test_place_only_touches_live() {
        let mut session = session("independent boards", 40);
        let original = session.original().clone();
        let solved = session.solved().clone();

        let pos = first_editable(&session);
        let digit = wrong_digit(&session, pos);
        assert!(session.place(pos, digit).is_applied());

        assert_eq!(session.live()[pos], Some(digit));
        assert_eq!(session.original(), &original);
        assert_eq!(session.solved(), &solved);
    }

    #[test]
    fn test_place_rejected_on_given_cell() {
        let mut session = session("given cells", 40);
        let given = Position::ALL
            .into_iter()
            .find(|&pos| !session.is_editable(pos))
            .expect("puzzle has given cells");
        let before = session.live().clone();

        assert!(session.place(given, Digit::ALL[0]).is_not_permitted());
        assert_eq!(session.live(), &before);
    }

    #[test]
    fn test_nothing_editable_when_nothing_removed() {
        let mut session = session("all given", 0);
        assert!(session.is_full());
        for pos in Position::ALL {
            assert!(!session.is_editable(pos));
            assert!(session.place(pos, Digit::ALL[4]).is_not_permitted());
            assert!(session.toggle_sketch(pos, Digit::ALL[4]).is_not_permitted());
        }
        assert!(session.is_won());
    }

    #[test]
    fn test_everything_editable_when_all_removed() {
        let session = session("blank board", 81);
        assert_eq!(session.live().count_empty(), 81);
        for pos in Position::ALL {
            assert!(session.is_editable(pos));
        }
    }

    #[test]
    fn test_sketch_toggle_and_commit_last() {
        let mut session = session("sketching", 40);
        let pos = first_editable(&session);
        let first = Digit::ALL[1];
        let second = Digit::ALL[6];

        assert_eq!(session.toggle_sketch(pos, first), SketchOutcome::Added);
        assert_eq!(session.toggle_sketch(pos, second), SketchOutcome::Added);
        assert_eq!(session.sketch(pos).last(), Some(second));

        assert!(session.commit_sketch(pos).is_applied());
        assert_eq!(session.live()[pos], Some(second));
        assert!(session.sketch(pos).is_empty());
    }

    #[test]
    fn test_sketch_toggle_off_restores_empty_marks() {
        let mut session = session("toggle law", 40);
        let pos = first_editable(&session);
        let digit = Digit::ALL[3];

        assert_eq!(session.toggle_sketch(pos, digit), SketchOutcome::Added);
        assert_eq!(session.toggle_sketch(pos, digit), SketchOutcome::Removed);
        assert!(session.sketch(pos).is_empty());
    }

    #[test]
    fn test_committed_cell_stops_accepting_sketches() {
        let mut session = session("committed cell", 40);
        let pos = first_editable(&session);

        session.toggle_sketch(pos, Digit::ALL[0]);
        assert!(session.commit_sketch(pos).is_applied());

        assert!(session.toggle_sketch(pos, Digit::ALL[1]).is_not_permitted());
        assert!(session.commit_sketch(pos).is_not_permitted());
    }

    #[test]
    fn test_commit_without_marks_is_rejected() {
        let mut session = session("empty commit", 40);
        let pos = first_editable(&session);
        assert!(session.commit_sketch(pos).is_not_permitted());
        assert!(session.live()[pos].is_none());
    }

    #[test]
    fn test_place_clears_pending_marks() {
        let mut session = session("overwrite marks", 40);
        let pos = first_editable(&session);

        session.toggle_sketch(pos, Digit::ALL[2]);
        let digit = wrong_digit(&session, pos);
        assert!(session.place(pos, digit).is_applied());
        assert!(session.sketch(pos).is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state_and_is_idempotent() {
        let mut session = session("reset", 40);
        let pristine = session.clone();

        let pos = first_editable(&session);
        let digit = wrong_digit(&session, pos);
        session.place(pos, digit);
        let other = Position::ALL
            .into_iter()
            .find(|&p| session.live()[p].is_none())
            .expect("another vacant cell exists");
        session.toggle_sketch(other, Digit::ALL[4]);
        session.select(pos);
        assert_ne!(session, pristine);

        session.reset();
        assert_eq!(session, pristine);
        assert_eq!(session.selection(), None);

        session.reset();
        assert_eq!(session, pristine);
    }

    #[test]
    fn test_win_by_filling_from_solution() {
        let mut session = session("win", 40);
        for pos in Position::ALL {
            if session.is_editable(pos) {
                let digit = session.solved()[pos].expect("solution is complete");
                assert!(session.place(pos, digit).is_applied());
            }
        }
        assert!(session.is_full());
        assert!(session.is_won());
    }

    #[test]
    fn test_full_but_wrong_is_not_won() {
        let mut session = session("loss", 40);
        let spoiled = first_editable(&session);
        for pos in Position::ALL {
            if session.is_editable(pos) {
                let digit = if pos == spoiled {
                    wrong_digit(&session, pos)
                } else {
                    session.solved()[pos].expect("solution is complete")
                };
                session.place(pos, digit);
            }
        }
        assert!(session.is_full());
        assert!(!session.is_won());
    }

    #[test]
    fn test_next_vacant_scans_strictly_away() {
        let session = session("navigation", 81);
        let from = Position::new(4, 4);
        assert_eq!(
            session.next_vacant(from, Direction::Right),
            Some(Position::new(4, 5))
        );
        assert_eq!(
            session.next_vacant(from, Direction::Up),
            Some(Position::new(3, 4))
        );
    }

    #[test]
    fn test_next_vacant_skips_filled_cells() {
        let mut session = session("navigation skip", 81);
        session.place(Position::new(4, 5), Digit::ALL[0]);
        session.place(Position::new(4, 6), Digit::ALL[1]);
        assert_eq!(
            session.next_vacant(Position::new(4, 4), Direction::Right),
            Some(Position::new(4, 7))
        );
    }

    #[test]
    fn test_next_vacant_none_at_edge() {
        let session = session("navigation edge", 81);
        assert_eq!(session.next_vacant(Position::new(0, 4), Direction::Up), None);
        assert_eq!(
            session.next_vacant(Position::new(8, 4), Direction::Down),
            None
        );

        let full = self::session("navigation full", 0);
        for direction in Direction::ALL {
            assert_eq!(full.next_vacant(Position::new(4, 4), direction), None);
        }
    }

    #[test]
    fn test_selection_cursor() {
        let mut session = session("selection", 40);
        assert_eq!(session.selection(), None);
        session.select(Position::new(2, 7));
        assert_eq!(session.selection(), Some(Position::new(2, 7)));
        session.clear_selection();
        assert_eq!(session.selection(), None);
    }
}
