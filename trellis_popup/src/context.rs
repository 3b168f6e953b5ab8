// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared popup configuration.
//!
//! ## Single writer
//!
//! One popup instance owns one [`SharedConfig`]. It is not `Clone`: whoever holds it (the
//! [`VisibilityController`](crate::VisibilityController)) is the only writer. Descendants
//! (menus, items, togglers) receive [`ConfigView`]s, which are cheap to clone and read-only.
//!
//! Every write that changes a value bumps a revision counter. A view can compare
//! [`ConfigView::revision`] against a previously seen value to detect that it is stale.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use crate::alignment::Alignment;

/// State shared by every element of one popup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupConfig {
    /// Menu alignment.
    pub alignment: Option<Alignment>,
    /// Dark color scheme.
    pub dark: bool,
    /// Position the floating element with the placement engine.
    pub use_positioning: bool,
    /// Open or closed.
    pub visible: bool,
}

impl PopupConfig {
    /// Automatic positioning applies: requested, and alignment is not responsive.
    ///
    /// ```
    /// use trellis_popup::{Align, Alignment, Breakpoint, PopupConfig, ResponsiveAlignment};
    ///
    /// let mut config = PopupConfig { use_positioning: true, ..Default::default() };
    /// assert!(config.positioning_enabled());
    ///
    /// config.alignment = Some(Alignment::Simple(Align::End));
    /// assert!(config.positioning_enabled());
    ///
    /// config.alignment = Some(Alignment::Responsive(
    ///     ResponsiveAlignment::new().with(Breakpoint::Md, Align::End),
    /// ));
    /// assert!(!config.positioning_enabled());
    /// ```
    pub fn positioning_enabled(&self) -> bool {
        self.use_positioning && !self.alignment.as_ref().is_some_and(Alignment::is_responsive)
    }
}

#[derive(Debug)]
struct Shared {
    config: RefCell<PopupConfig>,
    revision: Cell<u64>,
}

/// Write handle of a popup's configuration. See the [module docs](self).
#[derive(Debug)]
pub struct SharedConfig {
    shared: Rc<Shared>,
}

impl SharedConfig {
    /// Wrap `config`.
    pub fn new(config: PopupConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                config: RefCell::new(config),
                revision: Cell::new(0),
            }),
        }
    }

    /// A read-only view for descendants.
    pub fn view(&self) -> ConfigView {
        ConfigView {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> PopupConfig {
        self.shared.config.borrow().clone()
    }

    /// Current visibility.
    pub fn visible(&self) -> bool {
        self.shared.config.borrow().visible
    }

    /// Set visibility. Returns `true` if it changed.
    pub fn set_visible(&self, visible: bool) -> bool {
        self.update(|c| {
            let changed = c.visible != visible;
            c.visible = visible;
            changed
        })
    }

    /// Set the dark flag. Returns `true` if it changed.
    pub fn set_dark(&self, dark: bool) -> bool {
        self.update(|c| {
            let changed = c.dark != dark;
            c.dark = dark;
            changed
        })
    }

    /// Apply `f`; bump the revision when it reports a change.
    fn update(&self, f: impl FnOnce(&mut PopupConfig) -> bool) -> bool {
        let changed = f(&mut self.shared.config.borrow_mut());
        if changed {
            self.shared.revision.set(self.shared.revision.get() + 1);
        }
        changed
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }
}

/// Read-only view of a popup's configuration.
#[derive(Clone, Debug)]
pub struct ConfigView {
    shared: Rc<Shared>,
}

impl ConfigView {
    /// Snapshot of the current configuration.
    pub fn get(&self) -> PopupConfig {
        self.shared.config.borrow().clone()
    }

    /// Current visibility.
    pub fn visible(&self) -> bool {
        self.shared.config.borrow().visible
    }

    /// Current dark flag.
    pub fn dark(&self) -> bool {
        self.shared.config.borrow().dark
    }

    /// Current alignment.
    pub fn alignment(&self) -> Option<Alignment> {
        self.shared.config.borrow().alignment
    }

    /// Whether automatic positioning applies.
    pub fn positioning_enabled(&self) -> bool {
        self.shared.config.borrow().positioning_enabled()
    }

    /// Revision of the configuration; increases on every change.
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_observe_writes() {
        let config = SharedConfig::new(PopupConfig::default());
        let view = config.view();
        let other = view.clone();
        assert!(!view.visible());
        assert!(config.set_visible(true));
        assert!(view.visible() && other.visible());
        assert!(config.set_dark(true));
        assert!(view.dark());
        assert_eq!(view.get(), config.get());
    }

    #[test]
    fn revision_bumps_only_on_change() {
        let config = SharedConfig::new(PopupConfig::default());
        let view = config.view();
        assert_eq!(view.revision(), 0);
        assert!(!config.set_visible(false));
        assert_eq!(view.revision(), 0);
        assert!(config.set_visible(true));
        assert!(!config.set_visible(true));
        assert_eq!(view.revision(), 1);
        assert_eq!(config.revision(), 1);
    }

    #[test]
    fn positioning_requires_opt_in() {
        let config = PopupConfig::default();
        assert!(!config.positioning_enabled());
    }
}
