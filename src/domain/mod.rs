// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std` and `serde` for
//! configuration keys) to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`grid`]: Grid value objects ([`CellId`](grid::CellId),
//!   [`GapRatio`](grid::GapRatio), [`LingerDuration`](grid::LingerDuration),
//!   [`SizeBounds`](grid::SizeBounds))

pub mod grid;
