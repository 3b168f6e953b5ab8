// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility controller: the single writer of a popup's open/closed state.

use tracing::trace;

use crate::context::{ConfigView, PopupConfig, SharedConfig};

/// Result of a visibility mutation.
///
/// Owners run dependent side effects (positioning, listener registration) after the
/// mutation, keyed on this value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Closed → open.
    Opened,
    /// Open → closed.
    Closed,
    /// Nothing changed.
    Unchanged,
}

impl Transition {
    fn between(was: bool, now: bool) -> Self {
        match (was, now) {
            (false, true) => Self::Opened,
            (true, false) => Self::Closed,
            _ => Self::Unchanged,
        }
    }
}

/// Owns a popup's [`SharedConfig`] and gates writes on the disabled flag.
///
/// ```
/// use trellis_popup::{PopupConfig, Transition, VisibilityController};
///
/// let mut c = VisibilityController::new(PopupConfig::default(), false);
/// assert_eq!(c.toggle(), Transition::Opened);
/// assert_eq!(c.toggle(), Transition::Closed);
///
/// c.set_disabled(true);
/// assert_eq!(c.toggle(), Transition::Unchanged);
/// assert!(!c.is_visible());
/// ```
#[derive(Debug)]
pub struct VisibilityController {
    config: SharedConfig,
    disabled: bool,
}

impl VisibilityController {
    /// Create a controller owning `config`.
    pub fn new(config: PopupConfig, disabled: bool) -> Self {
        Self {
            config: SharedConfig::new(config),
            disabled,
        }
    }

    /// A read-only view of the configuration for descendants.
    pub fn view(&self) -> ConfigView {
        self.config.view()
    }

    /// Snapshot of the configuration.
    pub fn config(&self) -> PopupConfig {
        self.config.get()
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.config.visible()
    }

    /// Whether toggle/show/hide requests are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable toggle/show/hide requests. Does not change visibility.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Flip visibility unless disabled.
    pub fn toggle(&mut self) -> Transition {
        if self.disabled {
            return Transition::Unchanged;
        }
        let visible = self.config.visible();
        self.write(!visible)
    }

    /// Close unless disabled.
    pub fn hide(&mut self) -> Transition {
        if self.disabled {
            return Transition::Unchanged;
        }
        self.write(false)
    }

    /// Open unless disabled.
    pub fn show(&mut self) -> Transition {
        if self.disabled {
            return Transition::Unchanged;
        }
        self.write(true)
    }

    /// Set visibility from the host (a controlled `visible` prop). Ignores the disabled flag.
    pub fn set_visible(&mut self, visible: bool) -> Transition {
        self.write(visible)
    }

    /// Set the dark flag.
    pub fn set_dark(&mut self, dark: bool) {
        self.config.set_dark(dark);
    }

    fn write(&mut self, visible: bool) -> Transition {
        let was = self.config.visible();
        self.config.set_visible(visible);
        let transition = Transition::between(was, visible);
        if transition != Transition::Unchanged {
            trace!(?transition, revision = self.config.revision(), "visibility changed");
        }
        transition
    }
}
