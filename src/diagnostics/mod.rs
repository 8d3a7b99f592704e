// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-memory activity events.
//!
//! This module provides infrastructure for capturing activity events during
//! application usage and storing them in a memory-bounded circular buffer.
//! Nothing ever leaves the process; the buffer backs the in-app activity
//! screen and exists so odd interaction behavior can be inspected live.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: Timestamped activity event
//! - [`DiagnosticsHandle`]: Cheaply cloneable writer/reader over the shared buffer

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsHandle, DEFAULT_EVENT_CAPACITY};
pub use events::{DiagnosticEvent, EventKind, UserAction};
