// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`grid`] - The interactive circle field with the reveal overlay
//! - [`contact`] - Contact card
//! - [`activity_screen`] - Recent activity events
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar

pub mod activity_screen;
pub mod contact;
pub mod design_tokens;
pub mod grid;
pub mod navbar;
pub mod styles;
pub mod theming;
