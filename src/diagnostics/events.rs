// SPDX-License-Identifier: MPL-2.0
//! Activity event types.
//!
//! This module defines the events captured during application usage. They
//! feed the in-app activity screen and are useful when chasing odd
//! interaction behavior.

use std::fmt;
use std::time::Instant;

/// User-initiated actions worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The user navigated to another screen.
    SwitchScreen {
        /// Destination screen name.
        name: &'static str,
    },

    /// The reveal overlay was opened from the sentinel circle.
    OpenReveal,

    /// The reveal overlay was dismissed.
    DismissReveal,

    /// Fullscreen mode was toggled.
    ToggleFullscreen {
        /// Whether fullscreen is now enabled.
        enabled: bool,
    },
}

/// What happened, without the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A user-initiated action.
    Action(UserAction),

    /// The grid geometry was recomputed after a resize or mode flip.
    GridRebuilt {
        columns: usize,
        rows: usize,
    },

    /// A non-fatal problem, identified by its message key.
    Warning {
        key: String,
    },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Action(UserAction::SwitchScreen { name }) => {
                write!(f, "switched to {} screen", name)
            }
            EventKind::Action(UserAction::OpenReveal) => write!(f, "reveal opened"),
            EventKind::Action(UserAction::DismissReveal) => write!(f, "reveal dismissed"),
            EventKind::Action(UserAction::ToggleFullscreen { enabled: true }) => {
                write!(f, "entered fullscreen")
            }
            EventKind::Action(UserAction::ToggleFullscreen { enabled: false }) => {
                write!(f, "left fullscreen")
            }
            EventKind::GridRebuilt { columns, rows } => {
                write!(f, "grid rebuilt: {}x{}", columns, rows)
            }
            EventKind::Warning { key } => write!(f, "warning: {}", key),
        }
    }
}

/// A timestamped activity event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    kind: EventKind,
    at: Instant,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            at: Instant::now(),
        }
    }

    /// Returns what happened.
    #[must_use]
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Returns how long ago the event was recorded.
    #[must_use]
    pub fn age_secs(&self) -> u64 {
        self.at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_describes_grid_rebuild() {
        let kind = EventKind::GridRebuilt {
            columns: 6,
            rows: 5,
        };
        assert_eq!(kind.to_string(), "grid rebuilt: 6x5");
    }

    #[test]
    fn display_describes_screen_switch() {
        let kind = EventKind::Action(UserAction::SwitchScreen { name: "contact" });
        assert_eq!(kind.to_string(), "switched to contact screen");
    }

    #[test]
    fn fresh_event_has_zero_age() {
        let event = DiagnosticEvent::new(EventKind::Action(UserAction::OpenReveal));
        assert_eq!(event.age_secs(), 0);
    }
}
