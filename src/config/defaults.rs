// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Circle Size**: Regular and compact circle size bounds
//! - **Gap**: Gap between circles as a fraction of the circle size
//! - **Linger**: Highlight linger duration after the pointer leaves a cell
//! - **Overlay**: Reveal overlay caption
//! - **Viewport**: Compact-mode breakpoint

// ==========================================================================
// Circle Size Defaults
// ==========================================================================

/// Default minimum circle size in logical pixels.
pub const DEFAULT_MIN_CIRCLE_SIZE: f32 = 20.0;

/// Default maximum circle size in logical pixels.
pub const DEFAULT_MAX_CIRCLE_SIZE: f32 = 40.0;

/// Default minimum circle size in compact mode.
pub const DEFAULT_COMPACT_MIN_CIRCLE_SIZE: f32 = 14.0;

/// Default maximum circle size in compact mode.
pub const DEFAULT_COMPACT_MAX_CIRCLE_SIZE: f32 = 28.0;

// ==========================================================================
// Gap Defaults
// ==========================================================================

/// Default gap between circles, as a fraction of the circle size.
pub const DEFAULT_GAP_RATIO: f32 = 0.2;

// ==========================================================================
// Linger Defaults
// ==========================================================================

/// Default linger duration in milliseconds.
pub const DEFAULT_LINGER_MS: u64 = 450;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default caption revealed letter-by-letter across the grid.
pub const DEFAULT_CAPTION: &str = "Say hi!";

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Window width (logical pixels) at or below which the compact circle
/// size bounds apply.
pub const COMPACT_WIDTH_BREAKPOINT: f32 = 768.0;
