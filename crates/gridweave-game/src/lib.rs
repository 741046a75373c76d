//! Play-session tracking for the gridweave sudoku workspace.
//!
//! This crate owns everything between puzzle generation and the
//! presentation layer: which cells accept input, provisional sketch
//! marks, cursor navigation, and win detection. The presentation layer
//! (windowing, rendering, event dispatch) lives elsewhere and drives a
//! [`Session`] through its methods.
//!
//! # Examples
//!
//! ```
//! use gridweave_core::{Digit, Position};
//! use gridweave_game::Session;
//! use gridweave_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let puzzle = PuzzleGenerator::for_difficulty(Difficulty::Easy)
//!     .generate_with_seed(PuzzleSeed::from_phrase("docs"))
//!     .unwrap();
//! let mut session = Session::new(puzzle);
//!
//! // Sketch a candidate on some editable cell, then commit it
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| session.is_editable(pos))
//!     .unwrap();
//! session.toggle_sketch(pos, Digit::new(4).unwrap());
//! assert!(session.commit_sketch(pos).is_applied());
//! ```

pub use self::{
    session::{PlacementOutcome, Session, SketchOutcome},
    sketch::SketchMarks,
};

mod session;
mod sketch;
