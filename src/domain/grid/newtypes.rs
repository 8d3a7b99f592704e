// SPDX-License-Identifier: MPL-2.0
//! Grid newtypes.
//!
//! This module provides type-safe wrappers for grid values,
//! ensuring they are always within valid ranges.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Cell Identifiers
// =============================================================================

/// Identifier for one grid cell, row-major indexed from 1.
///
/// Cells are addressed by the textual token `c<index>` (`c1`, `c2`, ...),
/// which is also how per-cell configuration overrides are keyed in
/// `settings.toml`. The index is unique within one layout pass; a resize that
/// changes the grid dimensions re-derives which position each id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Creates a cell id from a 1-based row-major index.
    ///
    /// Returns `None` for index 0, which addresses no cell.
    #[must_use]
    pub fn from_row_major(index: usize) -> Option<Self> {
        if index == 0 {
            None
        } else {
            Some(Self(index))
        }
    }

    /// Returns the 1-based row-major index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the 0-based position used for letter assignment.
    #[must_use]
    pub fn position(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Error returned when parsing a malformed cell token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellIdError;

impl fmt::Display for ParseCellIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a cell token of the form `c<index>` with index >= 1")
    }
}

impl FromStr for CellId {
    type Err = ParseCellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('c').ok_or(ParseCellIdError)?;
        let index: usize = digits.parse().map_err(|_| ParseCellIdError)?;
        CellId::from_row_major(index).ok_or(ParseCellIdError)
    }
}

impl Serialize for CellId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CellId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellIdVisitor;

        impl Visitor<'_> for CellIdVisitor {
            type Value = CellId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a cell token of the form `c<index>`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<CellId, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CellIdVisitor)
    }
}

// =============================================================================
// Gap Ratio Bounds
// =============================================================================

/// Gap ratio bounds (fraction of the circle size).
pub mod gap_bounds {
    /// Minimum gap ratio (circles touch).
    pub const MIN: f32 = 0.0;
    /// Maximum gap ratio (gap as wide as a circle).
    pub const MAX: f32 = 1.0;
    /// Default gap ratio.
    pub const DEFAULT: f32 = 0.2;
}

/// Gap between circles as a fraction of the circle size, clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRatio(f32);

impl GapRatio {
    /// Creates a new gap ratio, clamping the value to the valid range.
    ///
    /// Non-finite inputs fall back to the default.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_finite() {
            Self(ratio.clamp(gap_bounds::MIN, gap_bounds::MAX))
        } else {
            Self(gap_bounds::DEFAULT)
        }
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for GapRatio {
    fn default() -> Self {
        Self(gap_bounds::DEFAULT)
    }
}

// =============================================================================
// Linger Duration Bounds
// =============================================================================

/// Linger duration bounds in milliseconds.
pub mod linger_bounds {
    /// Minimum linger duration (deactivation on the next tick).
    pub const MIN_MS: u64 = 0;
    /// Maximum linger duration.
    pub const MAX_MS: u64 = 10_000;
    /// Default linger duration.
    pub const DEFAULT_MS: u64 = 450;
}

/// How long a cell stays highlighted after the pointer leaves it,
/// clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LingerDuration(u64);

impl LingerDuration {
    /// Creates a new linger duration from milliseconds, clamping to the range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(linger_bounds::MIN_MS, linger_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for LingerDuration {
    fn default() -> Self {
        Self(linger_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Circle Size Bounds
// =============================================================================

/// Circle size limits in logical pixels.
pub mod size_bounds {
    /// Smallest circle size the layout may produce.
    pub const FLOOR: f32 = 1.0;
    /// Largest circle size the layout may produce.
    pub const CEILING: f32 = 512.0;
    /// Default minimum circle size.
    pub const DEFAULT_MIN: f32 = 20.0;
    /// Default maximum circle size.
    pub const DEFAULT_MAX: f32 = 40.0;
    /// Default minimum circle size in compact (narrow-window) mode.
    pub const DEFAULT_COMPACT_MIN: f32 = 14.0;
    /// Default maximum circle size in compact (narrow-window) mode.
    pub const DEFAULT_COMPACT_MAX: f32 = 28.0;
}

/// A sanitized (min, max) pair of circle sizes.
///
/// Construction guarantees `FLOOR <= min <= max <= CEILING`, so clamping a
/// candidate size into the pair can never panic or invert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    min: f32,
    max: f32,
}

impl SizeBounds {
    /// Creates sanitized bounds. Non-finite inputs fall back to the defaults;
    /// an inverted pair is widened so `max >= min`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() {
            min.clamp(size_bounds::FLOOR, size_bounds::CEILING)
        } else {
            size_bounds::DEFAULT_MIN
        };
        let max = if max.is_finite() {
            max.clamp(size_bounds::FLOOR, size_bounds::CEILING)
        } else {
            size_bounds::DEFAULT_MAX
        };
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Returns the minimum circle size.
    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the maximum circle size.
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a candidate size into the bounds.
    #[must_use]
    pub fn clamp(self, candidate: f32) -> f32 {
        candidate.clamp(self.min, self.max)
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::new(size_bounds::DEFAULT_MIN, size_bounds::DEFAULT_MAX)
    }
}
