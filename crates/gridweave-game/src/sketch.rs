//! Provisional sketch marks for a single cell.

use gridweave_core::Digit;
use tinyvec::ArrayVec;

/// The sketch marks a player has noted on one empty cell.
///
/// Marks are kept in insertion order and hold no duplicates: toggling a
/// digit that is already present removes it instead. Insertion order
/// matters because committing a cell writes the most recently added
/// mark.
///
/// # Examples
///
/// ```
/// use gridweave_core::Digit;
/// use gridweave_game::SketchMarks;
///
/// let mut marks = SketchMarks::new();
/// assert!(marks.toggle(Digit::new(3).unwrap()));
/// assert!(marks.toggle(Digit::new(7).unwrap()));
/// assert_eq!(marks.last(), Digit::new(7));
///
/// // Toggling again removes the mark
/// assert!(!marks.toggle(Digit::new(7).unwrap()));
/// assert_eq!(marks.last(), Digit::new(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SketchMarks {
    // Digit values 1-9, oldest first.
    marks: ArrayVec<[u8; 9]>,
}

impl SketchMarks {
    /// Creates an empty set of marks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `digit`: appends it when absent (returning `true`),
    /// removes it when present (returning `false`).
    pub fn toggle(&mut self, digit: Digit) -> bool {
        let value = digit.get();
        if let Some(i) = self.marks.iter().position(|&mark| mark == value) {
            self.marks.remove(i);
            false
        } else {
            self.marks.push(value);
            true
        }
    }

    /// Returns `true` when `digit` is currently marked.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.marks.contains(&digit.get())
    }

    /// Returns the most recently added mark, if any.
    #[must_use]
    pub fn last(&self) -> Option<Digit> {
        self.marks
            .last()
            .map(|&value| Digit::ALL[usize::from(value) - 1])
    }

    /// Removes all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Returns `true` when no digit is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the number of marked digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns the marks in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.marks
            .iter()
            .map(|&value| Digit::ALL[usize::from(value) - 1])
    }
}
