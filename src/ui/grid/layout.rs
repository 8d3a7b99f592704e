// SPDX-License-Identifier: MPL-2.0
//! Grid layout engine.
//!
//! Given the available area and the configured size constraints, computes how
//! large each circle is, how wide the gaps are, and how many columns and rows
//! fit. The computation is a pure function of its inputs; the grid component
//! re-runs it on every resize and on every compact/regular mode flip.

use crate::domain::grid::{CellId, GapRatio, SizeBounds};
use iced::{Point, Size};

/// Derived layout values for one pass.
///
/// `columns * rows` determines the cell population; the sentinel is the last
/// cell in row-major order and is re-derived on every recomputation, so its
/// identity is not stable across resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub circle_size: f32,
    pub gap_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Geometry {
    /// Returns the number of cells in this layout pass.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Returns the last cell in row-major order, whose activation opens the
    /// reveal overlay. Absent when the grid has no cells.
    #[must_use]
    pub fn sentinel(&self) -> Option<CellId> {
        CellId::from_row_major(self.cell_count())
    }

    /// Returns whether `cell` addresses a cell of this layout pass.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.index() <= self.cell_count()
    }

    /// Iterates over this pass's cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        (1..=self.cell_count()).filter_map(CellId::from_row_major)
    }

    /// Distance from one circle's left edge to the next one's.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.circle_size + self.gap_size
    }

    /// Top-left corner of the grid, centered inside `container`.
    #[must_use]
    pub fn origin(&self, container: Size) -> Point {
        let used_width = self.columns as f32 * self.pitch() - self.gap_size;
        let used_height = self.rows as f32 * self.pitch() - self.gap_size;
        Point::new(
            (container.width - used_width.max(0.0)) / 2.0,
            (container.height - used_height.max(0.0)) / 2.0,
        )
    }

    /// Center of `cell`'s circle, in container coordinates.
    ///
    /// Callers must pass a cell of this layout pass (see [`Geometry::contains`]).
    #[must_use]
    pub fn cell_center(&self, cell: CellId, container: Size) -> Point {
        let origin = self.origin(container);
        let col = cell.position() % self.columns.max(1);
        let row = cell.position() / self.columns.max(1);
        let radius = self.circle_size / 2.0;
        Point::new(
            origin.x + col as f32 * self.pitch() + radius,
            origin.y + row as f32 * self.pitch() + radius,
        )
    }

    /// Resolves a point in container coordinates to the circle under it.
    ///
    /// Points in the gaps between circles, or outside the grid, resolve to
    /// `None`.
    #[must_use]
    pub fn cell_at_point(&self, point: Point, container: Size) -> Option<CellId> {
        if self.columns == 0 || self.rows == 0 {
            return None;
        }

        let origin = self.origin(container);
        let rel_x = point.x - origin.x;
        let rel_y = point.y - origin.y;
        if rel_x < 0.0 || rel_y < 0.0 {
            return None;
        }

        let col = (rel_x / self.pitch()) as usize;
        let row = (rel_y / self.pitch()) as usize;
        if col >= self.columns || row >= self.rows {
            return None;
        }

        let cell = CellId::from_row_major(row * self.columns + col + 1)?;
        let center = self.cell_center(cell, container);
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let radius = self.circle_size / 2.0;
        if dx * dx + dy * dy <= radius * radius {
            Some(cell)
        } else {
            None
        }
    }
}

/// Computes the grid geometry for `container`.
///
/// The circle size is the largest that lets a whole number of maximum-sized
/// slots fit along both axes, clamped into `bounds`; column and row counts
/// then follow from flooring the axis lengths by the circle-plus-gap pitch.
/// A zero-sized container degrades to a slot count of 1 and an empty grid
/// rather than dividing by zero.
#[must_use]
pub fn compute_geometry(container: Size, bounds: SizeBounds, gap_ratio: GapRatio) -> Geometry {
    let gap = gap_ratio.value();
    let slot = bounds.max() * (1.0 + gap);

    let width_slots = (container.width / slot).floor().max(1.0);
    let height_slots = (container.height / slot).floor().max(1.0);

    let width_candidate = container.width / width_slots;
    let height_candidate = container.height / height_slots;

    let circle_size = bounds.clamp(width_candidate.min(height_candidate));
    let gap_size = circle_size * gap;
    let pitch = circle_size + gap_size;

    // Floored at zero so a negative axis yields an empty grid.
    let columns = (container.width / pitch).floor().max(0.0) as usize;
    let rows = (container.height / pitch).floor().max(0.0) as usize;

    Geometry {
        circle_size,
        gap_size,
        columns,
        rows,
    }
}
