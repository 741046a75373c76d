//! Core data structures for the gridweave sudoku workspace.
//!
//! This crate holds the board data model and the pure placement
//! predicates shared by puzzle generation and game session tracking.
//! It has no opinion about how puzzles are produced or played.
//!
//! # Overview
//!
//! - [`digit`]: [`Digit`], a validated digit 1-9; empty cells are
//!   `Option::<Digit>::None`.
//! - [`position`]: [`Position`] coordinates and [`Direction`] cursor
//!   steps.
//! - [`board`]: [`Board`], the 81-cell grid with a text format for tests
//!   and diagnostics.
//! - [`position_set`]: [`PositionSet`], an 81-bit membership set over
//!   cells.
//! - [`rules`]: row/column/box uniqueness predicates.
//!
//! # Examples
//!
//! ```
//! use gridweave_core::{Board, Digit, Position, rules};
//!
//! let mut board = Board::new();
//! let five = Digit::new(5).unwrap();
//!
//! assert!(rules::placement_admits(&board, Position::new(4, 4), five));
//! board.set(Position::new(4, 4), Some(five));
//!
//! // 5 is now taken in row 4, column 4, and the center box
//! assert!(!rules::placement_admits(&board, Position::new(4, 0), five));
//! ```

pub mod board;
pub mod digit;
pub mod position;
pub mod position_set;
pub mod rules;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    position::{Direction, Position},
    position_set::PositionSet,
};
