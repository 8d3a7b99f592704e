// SPDX-License-Identifier: MPL-2.0
//! `iced_dots` is a decorative, responsive grid of circles built with the
//! Iced GUI framework.
//!
//! Circles light up under the pointer and linger briefly after it moves on;
//! the last circle hides a letter-by-letter caption reveal. The crate
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
