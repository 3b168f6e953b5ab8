// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_placement --heading-base-level=0

//! Trellis Placement: Kurbo-native placement for popups, menus, and tooltips.
//!
//! ## Overview
//!
//! This crate answers "where does the floating element go?" for an anchor rectangle, a
//! floating size, and a logical [`Placement`] such as `bottom-start`.
//! It does not measure elements or render anything. Feed it rectangles computed by your
//! layout system.
//!
//! - [`Placement`]: the fifteen logical placements (`auto*`, `top*`, `bottom*`, `left*`, `right*`).
//! - [`compute_position`]: side/variation positioning, offset, `auto` side selection,
//!   flip on overflow, and cross-axis shift into a viewport.
//! - [`PlacementEngine`]: the substitution seam. [`RectEngine`] is the built-in engine;
//!   implement the trait yourself to delegate to another positioning backend.
//! - [`PositioningAdapter`]: owns an engine and at most one live anchor/floating binding,
//!   with an idempotent detach and a guarded re-attach.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use trellis_placement::{compute_position, ComputeOptions, Placement};
//!
//! let toggle = Rect::new(20.0, 560.0, 120.0, 590.0);
//! let options = ComputeOptions {
//!     viewport: Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
//!     ..Default::default()
//! };
//!
//! // No room below a toggle near the bottom edge: the menu flips above it.
//! let out = compute_position(toggle, Size::new(160.0, 200.0), Placement::BottomStart, &options);
//! assert_eq!(out.placement, Placement::TopStart);
//! assert_eq!(out.origin.y, 360.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod compute;
mod engine;
mod types;

pub use adapter::{AdapterState, PositioningAdapter};
pub use compute::{ComputeOptions, Offset, compute_position};
pub use engine::{BoundsLookup, PlacementEngine, RectEngine};
pub use types::{ParsePlacementError, Placement, PlacementResult, Side, Variation};
