// SPDX-License-Identifier: MPL-2.0
//! Shared handle over the activity event buffer.
//!
//! All writes happen on the UI thread inside the update loop, so a plain
//! mutex-guarded buffer is enough; the handle exists so screens and the
//! update loop can share one buffer without threading it through every call.

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, EventKind, UserAction};
use std::sync::{Arc, Mutex};

/// How many events the buffer retains before evicting the oldest.
pub const DEFAULT_EVENT_CAPACITY: usize = 200;

/// Cheaply cloneable writer/reader over the shared activity buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    inner: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsHandle {
    /// Creates a handle over a fresh buffer with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a handle over a fresh buffer with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records an arbitrary event.
    pub fn record(&self, kind: EventKind) {
        let Ok(mut buffer) = self.inner.lock() else {
            return;
        };
        buffer.push(DiagnosticEvent::new(kind));
    }

    /// Records a user action.
    pub fn log_action(&self, action: UserAction) {
        self.record(EventKind::Action(action));
    }

    /// Records a warning by its message key.
    pub fn log_warning(&self, key: impl Into<String>) {
        self.record(EventKind::Warning { key: key.into() });
    }

    /// Returns a copy of the buffered events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.inner.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    /// Returns true if no events were recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_empty() {
        let handle = DiagnosticsHandle::new();
        assert!(handle.is_empty());
        assert!(handle.snapshot().is_empty());
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::new();
        let clone = handle.clone();

        clone.log_action(UserAction::OpenReveal);

        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn capacity_bounds_the_buffer() {
        let handle = DiagnosticsHandle::with_capacity(2);

        handle.log_warning("one");
        handle.log_warning("two");
        handle.log_warning("three");

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind().to_string(), "warning: two");
        assert_eq!(events[1].kind().to_string(), "warning: three");
    }
}
