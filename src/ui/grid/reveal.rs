// SPDX-License-Identifier: MPL-2.0
//! Reveal overlay state.
//!
//! Tapping the sentinel circle reveals a caption, one character per cell in
//! row-major order. The overlay holds no timers; it appears and disappears
//! synchronously with the state flip.

use crate::domain::grid::CellId;

/// Caption letters distributed across the grid while the overlay is open.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    visible: bool,
    /// One entry per caption character, whitespace included; the entry at
    /// position `i` is shown on the cell at row-major position `i`.
    letters: Vec<char>,
}

impl RevealState {
    /// Creates a hidden overlay with no letters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes `caption` into per-cell letters and shows the overlay.
    ///
    /// Opening while already open replaces the letters, which is how a
    /// caption change while visible takes effect.
    pub fn open(&mut self, caption: &str) {
        self.letters = caption.chars().collect();
        self.visible = true;
    }

    /// Hides the overlay and clears the letters.
    pub fn close(&mut self) {
        self.visible = false;
        self.letters.clear();
    }

    /// Returns whether the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the character assigned to `cell`, if the overlay is open and
    /// the caption reaches that cell's position.
    ///
    /// Characters beyond the cell population are simply never asked for, and
    /// cells beyond the caption length get `None`; neither is an error.
    #[must_use]
    pub fn letter_for(&self, cell: CellId) -> Option<char> {
        if !self.visible {
            return None;
        }
        self.letters.get(cell.position()).copied()
    }

    /// Returns the number of letters held while open.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}
