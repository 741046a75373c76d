//! Sudoku puzzle generation for the gridweave workspace.
//!
//! A puzzle is generated in two steps: a complete solved board is built
//! by seeding the three diagonal 3x3 boxes with random digits and
//! completing the rest by backtracking, then a requested number of cells
//! is emptied at uniformly random positions. The emptied board is what a
//! player sees; the solved board is kept as the ground truth for win
//! detection.
//!
//! Removal is purely random: the generator makes no claim that the
//! resulting puzzle has a unique solution.
//!
//! All randomness flows from a single [`PuzzleSeed`], so any puzzle can
//! be reproduced from its seed alone.
//!
//! # Examples
//!
//! ```
//! use gridweave_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::for_difficulty(Difficulty::Easy);
//! let puzzle = generator
//!     .generate_with_seed(PuzzleSeed::from_phrase("docs"))
//!     .unwrap();
//!
//! assert!(puzzle.solution.is_full());
//! assert_eq!(puzzle.puzzle.count_empty(), 30);
//! ```

use gridweave_core::Board;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

pub use self::seed::{ParseSeedError, PuzzleSeed};

mod filler;
mod remover;
mod seed;

/// Difficulty presets, expressed as how many cells are removed from the
/// solved board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 30 cells removed.
    Easy,
    /// 40 cells removed.
    Medium,
    /// 50 cells removed.
    Hard,
}

impl Difficulty {
    /// Returns the number of cells removed at this difficulty.
    #[must_use]
    pub const fn removed_cells(self) -> u8 {
        match self {
            Self::Easy => 30,
            Self::Medium => 40,
            Self::Hard => 50,
        }
    }
}

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested removal count exceeds the number of cells.
    #[display("cannot remove {requested} cells from an 81-cell board")]
    InvalidRemovedCells {
        /// The requested removal count.
        requested: u8,
    },
    /// Backtracking exhausted every digit choice without completing the
    /// board. Unreachable for the standard 9x9 configuration; reported
    /// distinctly because it would indicate a bug in seeding or the
    /// placement predicates.
    #[display("board completion exhausted all digit choices")]
    Unfillable,
}

/// A generated puzzle: the board as presented, its solution, and the
/// seed that produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The solved board with the removed cells emptied.
    pub puzzle: Board,
    /// The complete solved board.
    pub solution: Board,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Generates puzzles with a fixed removal count.
///
/// # Examples
///
/// ```
/// use gridweave_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(64).unwrap();
/// let puzzle = generator.generate().unwrap();
/// assert_eq!(puzzle.puzzle.count_empty(), 64);
///
/// // Requests beyond the board are rejected up front
/// assert!(PuzzleGenerator::new(82).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    removed_cells: u8,
}

impl PuzzleGenerator {
    /// Creates a generator removing `removed_cells` cells per puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRemovedCells`] when
    /// `removed_cells` exceeds the 81 cells on the board.
    pub const fn new(removed_cells: u8) -> Result<Self, GeneratorError> {
        if removed_cells > 81 {
            return Err(GeneratorError::InvalidRemovedCells {
                requested: removed_cells,
            });
        }
        Ok(Self { removed_cells })
    }

    /// Creates a generator for a difficulty preset.
    #[must_use]
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            removed_cells: difficulty.removed_cells(),
        }
    }

    /// Returns the number of cells this generator removes.
    #[must_use]
    pub const fn removed_cells(&self) -> u8 {
        self.removed_cells
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unfillable`] if board completion fails
    /// (unreachable for the standard 9x9 configuration).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed always yields the same puzzle and solution.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unfillable`] if board completion fails
    /// (unreachable for the standard 9x9 configuration).
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let Some(solution) = filler::filled_board(&mut rng) else {
            log::error!("board completion exhausted all digit choices (seed {seed})");
            return Err(GeneratorError::Unfillable);
        };
        let mut puzzle = solution.clone();
        remover::clear_cells(&mut puzzle, self.removed_cells, &mut rng);
        log::debug!(
            "generated puzzle with {} cells removed (seed {seed})",
            self.removed_cells
        );
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        })
    }
}
