// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_popup --heading-base-level=0

//! Trellis Popup: headless dropdown and modal state.
//!
//! ## Overview
//!
//! This crate holds everything a dropdown or modal decides that is not drawing: whether it is
//! open, which window listeners it needs, whether an event counts as outside interaction,
//! where the menu goes, and which classes each element carries. Rendering and event capture
//! stay with the host.
//!
//! - [`VisibilityController`]: the single writer of a popup's open/closed state, shared with
//!   descendants through read-only [`ConfigView`]s.
//! - [`Listeners`] / [`ListenerScope`]: the window listener table, with scoped registration
//!   that cannot leak or duplicate.
//! - [`is_outside`]: outside-interaction detection over any [`ParentLookup`].
//! - [`Dropdown`]: controller, [`PositioningAdapter`](trellis_placement::PositioningAdapter),
//!   and outside dismissal wired together.
//! - [`Modal`] and [`Backdrop`]: enter/leave phases with deferred classes, Escape and outside
//!   dismissal, and the static-backdrop shake.
//! - [`DropdownOptions`] / [`ModalOptions`]: the declarative configuration surface, with
//!   serde support and the [`validate`] predicates.
//!
//! ## Time
//!
//! Nothing here reads a clock. Operations that schedule work take `now` as a
//! [`Duration`](core::time::Duration) since a host-chosen epoch, and the host calls `tick(now)`
//! to apply what has come due.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_placement::{BoundsLookup, Placement, RectEngine};
//! use trellis_popup::{Dropdown, DropdownOptions, Listeners, ParentLookup, UiEvent};
//!
//! // 1 toggle root ── 2 menu; 9 elsewhere on the page.
//! struct Page;
//! impl ParentLookup<u32> for Page {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node == 2).then_some(1)
//!     }
//! }
//! impl BoundsLookup<u32> for Page {
//!     fn bounds_of(&self, node: &u32) -> Option<Rect> {
//!         match node {
//!             1 => Some(Rect::new(10.0, 10.0, 110.0, 40.0)),
//!             2 => Some(Rect::new(0.0, 0.0, 160.0, 120.0)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let listeners = Listeners::new();
//! let mut dropdown = Dropdown::new(DropdownOptions::default(), 1, 2, RectEngine::new(Page));
//! dropdown.mount(&listeners);
//!
//! dropdown.toggle();
//! assert_eq!(listeners.len(), 1);
//! let placed = dropdown.placement_result().unwrap();
//! assert_eq!(placed.placement, Placement::BottomStart);
//! assert_eq!((placed.origin.x, placed.origin.y), (10.0, 40.0));
//!
//! dropdown.handle_event(&Page, &UiEvent::PointerDown { target: 9 });
//! assert!(!dropdown.is_visible());
//! assert!(listeners.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alignment;
mod backdrop;
mod context;
mod controller;
mod deadline;
mod dropdown;
mod listeners;
mod modal;
mod options;
mod outside;

pub mod validate;

pub use alignment::{Align, Alignment, Breakpoint, ResponsiveAlignment};
pub use backdrop::{Backdrop, SHOW_DELAY};
pub use context::{ConfigView, PopupConfig, SharedConfig};
pub use controller::{Transition, VisibilityController};
pub use dropdown::{Dropdown, DropdownContext, resolve_placement};
pub use listeners::{InstanceId, ListenerGuard, ListenerKinds, ListenerScope, Listeners};
pub use modal::{Modal, ModalOutcome, ModalPhase, STATIC_SHAKE};
pub use options::{
    BackdropMode, Direction, DropdownOptions, Fullscreen, ModalAlignment, ModalOptions,
    ModalSize, ParseOptionError, Triggers, Variant,
};
pub use outside::{Key, ParentLookup, UiEvent, is_outside, is_within};
