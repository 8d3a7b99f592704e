// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction state for the circle grid.
//!
//! Each cell gets a momentary highlighted state while the pointer is over it,
//! and that state lingers briefly after the pointer moves on. Deactivation is
//! deferred through per-cell deadlines checked on a periodic tick, mirroring
//! how the rest of the application expires overlay state.
//!
//! All methods take `now` explicitly so event sequences are reproducible in
//! tests; the update loop passes the tick's own `Instant`.

use crate::domain::grid::{CellId, LingerDuration};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Tracks which cells are highlighted and when each highlight expires.
///
/// Invariants:
/// - a cell has at most one pending deactivation deadline at any instant;
///   re-scheduling replaces the prior deadline,
/// - activating a cell always clears its own pending deadline first, so an
///   expiry can never race a fresh activation,
/// - clearing state that does not exist is a no-op, never a fault.
#[derive(Debug)]
pub struct LingerTracker {
    /// Cells currently rendered as highlighted.
    active: HashSet<CellId>,
    /// Deferred removals from the active set. Key presence doubles as the
    /// "timer handle": cancelling is removing the entry.
    pending: HashMap<CellId, Instant>,
    /// The cell currently under the pointer, if any.
    current: Option<CellId>,
    default_linger: LingerDuration,
    overrides: HashMap<CellId, LingerDuration>,
}

impl LingerTracker {
    /// Creates a tracker with the given default linger and per-cell overrides.
    #[must_use]
    pub fn new(
        default_linger: LingerDuration,
        overrides: HashMap<CellId, LingerDuration>,
    ) -> Self {
        Self {
            active: HashSet::new(),
            pending: HashMap::new(),
            current: None,
            default_linger,
            overrides,
        }
    }

    /// Returns the linger duration for `cell`: its override if configured,
    /// else the global default.
    #[must_use]
    pub fn linger_for(&self, cell: CellId) -> LingerDuration {
        self.overrides
            .get(&cell)
            .copied()
            .unwrap_or(self.default_linger)
    }

    /// Feeds the tracker the cell the pointer currently resolves to.
    ///
    /// `None` means the pointer is over no cell (a gap, the margin, or the
    /// sentinel, which is exempt from highlighting); the current cell is then
    /// scheduled for deactivation and the current marker cleared, so a later
    /// re-entry is treated as fresh.
    pub fn pointer_over(&mut self, hit: Option<CellId>, now: Instant) {
        match hit {
            Some(cell) => {
                if self.current == Some(cell) {
                    return;
                }
                if let Some(previous) = self.current.replace(cell) {
                    self.schedule_deactivation(previous, now);
                }
                self.activate(cell);
            }
            None => {
                if let Some(previous) = self.current.take() {
                    self.schedule_deactivation(previous, now);
                }
            }
        }
    }

    /// The pointer left the surface entirely (touch end/cancel, cursor left
    /// the window).
    pub fn pointer_left(&mut self, now: Instant) {
        self.pointer_over(None, now);
    }

    /// Expires every deadline at or before `now`. Returns the cells whose
    /// highlight was removed.
    pub fn tick(&mut self, now: Instant) -> Vec<CellId> {
        let expired: Vec<CellId> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(cell, _)| *cell)
            .collect();
        for cell in &expired {
            self.pending.remove(cell);
            self.active.remove(cell);
        }
        expired
    }

    /// Drops interaction state for cells beyond `cell_count`.
    ///
    /// Called after a geometry recomputation: the cell population changed, so
    /// highlights and deadlines for cells that no longer exist are discarded.
    pub fn retain_within(&mut self, cell_count: usize) {
        self.active.retain(|cell| cell.index() <= cell_count);
        self.pending.retain(|cell, _| cell.index() <= cell_count);
        if let Some(cell) = self.current {
            if cell.index() > cell_count {
                self.current = None;
            }
        }
    }

    /// Drains all interaction state; pending deadlines are cancelled so no
    /// expiry outlives the component. Safe to call repeatedly.
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.pending.clear();
        self.current = None;
    }

    /// Returns whether `cell` is currently highlighted.
    #[must_use]
    pub fn is_active(&self, cell: CellId) -> bool {
        self.active.contains(&cell)
    }

    /// Returns whether any deactivation deadline is outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Returns the number of highlighted cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the cell currently under the pointer, if any.
    #[must_use]
    pub fn current(&self) -> Option<CellId> {
        self.current
    }

    /// Activating always cancels the cell's own pending deadline first.
    fn activate(&mut self, cell: CellId) {
        self.pending.remove(&cell);
        self.active.insert(cell);
    }

    /// Replaces any prior deadline for `cell` with a fresh one.
    fn schedule_deactivation(&mut self, cell: CellId, now: Instant) {
        self.pending
            .insert(cell, now + self.linger_for(cell).as_duration());
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cell(index: usize) -> CellId {
        CellId::from_row_major(index).unwrap()
    }

    fn tracker() -> LingerTracker {
        LingerTracker::new(LingerDuration::from_millis(450), HashMap::new())
    }

    #[test]
    fn entering_a_cell_activates_it() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);

        assert!(tracker.is_active(cell(5)));
        assert_eq!(tracker.current(), Some(cell(5)));
        assert!(!tracker.has_pending());
    }

    #[test]
    fn leaving_the_surface_lingers_then_expires() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);
        tracker.pointer_left(now);

        // Before the linger elapses the highlight persists.
        assert!(tracker.is_active(cell(5)));
        assert!(tracker.tick(now + Duration::from_millis(449)).is_empty());
        assert!(tracker.is_active(cell(5)));

        // After it elapses the highlight is gone.
        let expired = tracker.tick(now + Duration::from_millis(450));
        assert_eq!(expired, vec![cell(5)]);
        assert!(!tracker.is_active(cell(5)));
        assert!(!tracker.has_pending());
    }

    #[test]
    fn moving_between_cells_keeps_both_active_mid_transition() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);
        tracker.pointer_over(Some(cell(6)), now);

        assert!(tracker.is_active(cell(5)));
        assert!(tracker.is_active(cell(6)));
        assert_eq!(tracker.current(), Some(cell(6)));
        assert_eq!(tracker.pending_count(), 1);

        // Only the departed cell expires.
        let expired = tracker.tick(now + Duration::from_millis(450));
        assert_eq!(expired, vec![cell(5)]);
        assert!(tracker.is_active(cell(6)));
    }

    #[test]
    fn reentering_before_expiry_cancels_the_deadline() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);
        tracker.pointer_left(now);
        assert!(tracker.has_pending());

        // Re-enter before the deadline fires.
        tracker.pointer_over(Some(cell(5)), now + Duration::from_millis(100));
        assert!(!tracker.has_pending());

        // The original deadline must not fire later.
        assert!(tracker.tick(now + Duration::from_millis(600)).is_empty());
        assert!(tracker.is_active(cell(5)));
    }

    #[test]
    fn at_most_one_deadline_per_cell_across_random_sequences() {
        let mut tracker = tracker();
        let mut now = Instant::now();

        // A pointer wandering back and forth, repeatedly leaving the surface.
        let sequence = [
            Some(1), Some(2), None, Some(2), Some(3), None, None, Some(1), Some(3), None,
            Some(2), Some(2), Some(1), None, Some(3),
        ];
        for step in sequence {
            now += Duration::from_millis(37);
            tracker.pointer_over(step.map(cell), now);
            assert!(tracker.pending_count() <= 3);
            // No cell appears in pending while it is the current cell.
            if let Some(current) = tracker.current() {
                assert!(!tracker.pending.contains_key(&current));
            }
        }
    }

    #[test]
    fn moving_over_the_same_cell_is_a_no_op() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);
        tracker.pointer_over(Some(cell(5)), now + Duration::from_millis(10));

        assert_eq!(tracker.active_count(), 1);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn per_cell_override_outlasts_the_default() {
        let mut overrides = HashMap::new();
        overrides.insert(cell(5), LingerDuration::from_millis(1200));
        let mut tracker = LingerTracker::new(LingerDuration::from_millis(450), overrides);
        let now = Instant::now();

        tracker.pointer_over(Some(cell(5)), now);
        tracker.pointer_over(Some(cell(6)), now);
        tracker.pointer_left(now);

        // c6 expires on the default linger, c5 on its longer override.
        let expired = tracker.tick(now + Duration::from_millis(450));
        assert_eq!(expired, vec![cell(6)]);
        assert!(tracker.is_active(cell(5)));

        let expired = tracker.tick(now + Duration::from_millis(1200));
        assert_eq!(expired, vec![cell(5)]);
    }

    #[test]
    fn geometry_shrink_drops_out_of_range_state() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(28)), now);
        tracker.pointer_over(Some(cell(29)), now);

        tracker.retain_within(20);

        assert!(!tracker.is_active(cell(28)));
        assert!(!tracker.is_active(cell(29)));
        assert!(!tracker.has_pending());
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn clear_all_cancels_every_deadline() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.pointer_over(Some(cell(1)), now);
        tracker.pointer_over(Some(cell(2)), now);
        tracker.pointer_left(now);
        assert!(tracker.has_pending());

        tracker.clear_all();
        tracker.clear_all(); // idempotent

        assert!(!tracker.has_pending());
        assert_eq!(tracker.active_count(), 0);
        // Nothing fires after teardown.
        assert!(tracker.tick(now + Duration::from_secs(10)).is_empty());
    }
}
