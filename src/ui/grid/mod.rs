// SPDX-License-Identifier: MPL-2.0
//! The circle grid: layout engine, pointer interaction, and reveal overlay.
//!
//! - [`layout`] - Pure geometry computation and point hit-testing
//! - [`interaction`] - Per-cell highlight state with deferred deactivation
//! - [`reveal`] - Caption letters distributed across cells
//! - [`component`] - The Elm-style screen component tying them together
//! - [`canvas`] - Canvas program drawing the circle field

pub mod canvas;
pub mod component;
pub mod interaction;
pub mod layout;
pub mod reveal;

pub use component::{Effect, Message, State, ViewEnv};
