// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backdrop: the fading layer behind a modal or offcanvas.

use alloc::vec::Vec;
use core::time::Duration;

use crate::deadline::Deadline;

/// Delay between rendering a fading element and adding its `show` class, so the
/// opacity transition has a starting frame.
pub const SHOW_DELAY: Duration = Duration::from_millis(1);

/// A backdrop element.
///
/// Showing renders the element at once and adds `show` after [`SHOW_DELAY`]. Hiding removes
/// `show` at once and stops rendering after [`transition_end`](Self::transition_end).
///
/// ```
/// use core::time::Duration;
/// use trellis_popup::{Backdrop, SHOW_DELAY};
///
/// let mut backdrop = Backdrop::new("modal-backdrop");
/// backdrop.set_visible(true, Duration::ZERO);
/// assert_eq!(backdrop.classes(), ["modal-backdrop", "fade"]);
/// backdrop.tick(SHOW_DELAY);
/// assert_eq!(backdrop.classes(), ["modal-backdrop", "fade", "show"]);
/// ```
#[derive(Clone, Debug)]
pub struct Backdrop {
    class_name: &'static str,
    visible: bool,
    rendered: bool,
    show: bool,
    show_at: Deadline,
}

impl Backdrop {
    /// Create a hidden backdrop with an extra class (e.g. `modal-backdrop`).
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            visible: false,
            rendered: false,
            show: false,
            show_at: Deadline::default(),
        }
    }

    /// Show or hide at time `now`.
    pub fn set_visible(&mut self, visible: bool, now: Duration) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.rendered = true;
            self.show_at.arm(now, SHOW_DELAY);
        } else {
            self.show = false;
            self.show_at.cancel();
        }
    }

    /// Apply deferred class changes due at `now`. Returns `true` if the classes changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.show_at.fire(now) {
            self.show = true;
            return true;
        }
        false
    }

    /// The renderer finished the fade. Stops rendering a hidden backdrop.
    pub fn transition_end(&mut self) {
        if !self.visible {
            self.rendered = false;
        }
    }

    /// Whether the backdrop is requested visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the element should be in the tree.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Classes for the element.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = alloc::vec![self.class_name, "fade"];
        if self.show {
            classes.push("show");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_is_deferred_one_frame() {
        let mut b = Backdrop::new("modal-backdrop");
        assert!(!b.is_rendered());
        b.set_visible(true, Duration::from_millis(10));
        assert!(b.is_rendered());
        assert!(!b.tick(Duration::from_millis(10)));
        assert!(b.tick(Duration::from_millis(11)));
        assert!(b.classes().contains(&"show"));
    }

    #[test]
    fn hide_drops_show_then_unrenders_after_fade() {
        let mut b = Backdrop::new("offcanvas-backdrop");
        b.set_visible(true, Duration::ZERO);
        b.tick(SHOW_DELAY);
        b.set_visible(false, SHOW_DELAY);
        assert_eq!(b.classes(), ["offcanvas-backdrop", "fade"]);
        assert!(b.is_rendered());
        b.transition_end();
        assert!(!b.is_rendered());
    }

    #[test]
    fn hiding_before_show_cancels_it() {
        let mut b = Backdrop::new("modal-backdrop");
        b.set_visible(true, Duration::ZERO);
        b.set_visible(false, Duration::ZERO);
        assert!(!b.tick(Duration::from_secs(1)));
        assert!(!b.classes().contains(&"show"));
    }

    #[test]
    fn transition_end_keeps_a_visible_backdrop() {
        let mut b = Backdrop::new("modal-backdrop");
        b.set_visible(true, Duration::ZERO);
        b.transition_end();
        assert!(b.is_rendered());
        assert!(b.is_visible());
    }
}
