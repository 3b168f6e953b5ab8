// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal: enter/leave phases, deferred classes, and outside dismissal.
//!
//! ## Phases
//!
//! ```text
//! Hidden ──show──▶ Entering ──transition_end──▶ Shown
//!    ▲                                            │
//!    └──transition_end── Leaving ◀──────hide──────┘
//! ```
//!
//! Entering renders the root, marks the body `modal-open`, and adds `show` one
//! [`SHOW_DELAY`] later. Listeners are registered once entering completes and removed once
//! leaving completes. With `transition` off, both phases complete immediately.
//!
//! The modal is controlled: outside interaction and Escape report
//! [`ModalOutcome::Dismissed`] and the host decides whether to hide it, unless the `dismiss`
//! option asks the modal to hide itself. A `static` backdrop turns those interactions into a
//! [`STATIC_SHAKE`] of the `modal-static` class.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use tracing::{debug, trace};

use crate::backdrop::{Backdrop, SHOW_DELAY};
use crate::context::PopupConfig;
use crate::controller::{Transition, VisibilityController};
use crate::deadline::Deadline;
use crate::listeners::{InstanceId, ListenerKinds, ListenerScope, Listeners};
use crate::options::{BackdropMode, Fullscreen, ModalAlignment, ModalOptions};
use crate::outside::{Key, ParentLookup, UiEvent, is_outside};

/// How long `modal-static` stays applied after a blocked dismissal.
pub const STATIC_SHAKE: Duration = Duration::from_millis(300);

/// Where a modal is in its enter/leave cycle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ModalPhase {
    /// Not rendered.
    #[default]
    Hidden,
    /// Rendered, fading in.
    Entering,
    /// Fully shown; listeners registered.
    Shown,
    /// Fading out.
    Leaving,
}

/// Result of routing a window event to a modal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ModalOutcome {
    /// The event did not concern the modal.
    Ignored,
    /// The modal asks to be closed.
    Dismissed,
    /// Dismissal was blocked by a static backdrop; `modal-static` is applied.
    Shaken,
}

/// A modal dialog over element keys `K`.
///
/// `root` is the outer `.modal` element and `content` the `.modal-content` element; events
/// targeting anything outside `content` count as outside interaction.
#[derive(Debug)]
pub struct Modal<K> {
    options: ModalOptions,
    controller: VisibilityController,
    root: K,
    content: K,
    phase: ModalPhase,
    show_class: bool,
    show_at: Deadline,
    shake: Deadline,
    scope: Option<ListenerScope>,
    backdrop: Option<Backdrop>,
}

impl<K: PartialEq> Modal<K> {
    /// Create a hidden, unmounted modal. The `visible` option takes effect on
    /// [`mount`](Self::mount).
    pub fn new(options: ModalOptions, root: K, content: K) -> Self {
        let backdrop = options
            .backdrop
            .is_shown()
            .then(|| Backdrop::new("modal-backdrop"));
        Self {
            controller: VisibilityController::new(PopupConfig::default(), false),
            options,
            root,
            content,
            phase: ModalPhase::Hidden,
            show_class: false,
            show_at: Deadline::default(),
            shake: Deadline::default(),
            scope: None,
            backdrop,
        }
    }

    /// Join `listeners` at time `now`.
    ///
    /// Enters if the `visible` option is set. A modal already shown through
    /// [`set_visible`](Self::set_visible) registers its listeners here.
    pub fn mount(&mut self, listeners: &Listeners, now: Duration) {
        if self.scope.is_some() {
            return;
        }
        let scope = ListenerScope::new(listeners);
        debug!(id = ?scope.id(), "modal mounted");
        self.scope = Some(scope);
        match self.phase {
            ModalPhase::Shown => self.after_enter(),
            ModalPhase::Hidden if self.options.visible => {
                self.set_visible(true, now);
            }
            _ => {}
        }
    }

    /// Release listeners and drop straight to [`ModalPhase::Hidden`].
    pub fn unmount(&mut self) {
        if let Some(scope) = self.scope.take() {
            debug!(id = ?scope.id(), "modal unmounted");
        }
        self.controller.set_visible(false);
        self.phase = ModalPhase::Hidden;
        self.show_class = false;
        self.show_at.cancel();
        self.shake.cancel();
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.set_visible(false, Duration::ZERO);
            backdrop.transition_end();
        }
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    /// Listener identity while mounted.
    pub fn id(&self) -> Option<InstanceId> {
        self.scope.as_ref().map(ListenerScope::id)
    }

    /// The options the modal was built with.
    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    /// Requested visibility.
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Current phase.
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Show or hide at time `now` (the controlled `visible` prop).
    pub fn set_visible(&mut self, visible: bool, now: Duration) -> Transition {
        let transition = self.controller.set_visible(visible);
        match transition {
            Transition::Opened => self.enter(now),
            Transition::Closed => self.leave(now),
            Transition::Unchanged => {}
        }
        transition
    }

    /// The renderer finished the current fade. Completes entering or leaving.
    pub fn transition_end(&mut self) {
        match self.phase {
            ModalPhase::Entering => self.after_enter(),
            ModalPhase::Leaving => self.after_leave(),
            ModalPhase::Hidden | ModalPhase::Shown => {}
        }
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.transition_end();
        }
    }

    /// Apply deferred class changes due at `now`. Returns `true` if any class changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = false;
        if self.show_at.fire(now) {
            self.show_class = true;
            changed = true;
        }
        if self.shake.fire(now) {
            trace!("static shake finished");
            changed = true;
        }
        if let Some(backdrop) = &mut self.backdrop {
            changed |= backdrop.tick(now);
        }
        changed
    }

    /// Route a window event delivered through the listener table.
    ///
    /// Only a shown, mounted modal reacts. A pointer-down outside the content dismisses (or
    /// shakes with a static backdrop). Escape dismisses (or shakes) when `keyboard` is on and
    /// focus is outside the content, so Escape typed into a field of the dialog is ignored.
    pub fn handle_event<P: ParentLookup<K> + ?Sized>(
        &mut self,
        tree: &P,
        event: &UiEvent<K>,
        now: Duration,
    ) -> ModalOutcome {
        let listening = self.scope.as_ref().is_some_and(ListenerScope::is_open);
        if self.phase != ModalPhase::Shown || !listening {
            return ModalOutcome::Ignored;
        }
        let requested = match event {
            UiEvent::PointerDown { .. } => is_outside(tree, &self.content, event),
            UiEvent::KeyUp { key, .. } => {
                *key == Key::Escape
                    && self.options.keyboard
                    && is_outside(tree, &self.content, event)
            }
        };
        if !requested {
            return ModalOutcome::Ignored;
        }
        if self.options.backdrop == BackdropMode::Static {
            self.shake.arm(now, STATIC_SHAKE);
            debug!("dismissal blocked by static backdrop");
            return ModalOutcome::Shaken;
        }
        debug!("modal dismissed");
        if self.options.dismiss {
            self.set_visible(false, now);
        }
        ModalOutcome::Dismissed
    }

    /// Whether the root should be displayed (`display: block`).
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    /// Whether the document body carries `modal-open`.
    pub fn body_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Entering | ModalPhase::Shown)
    }

    /// Whether `modal-static` is applied.
    pub fn is_shaking(&self) -> bool {
        self.shake.is_armed()
    }

    /// The backdrop, when the options ask for one.
    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// The root element key.
    pub fn root(&self) -> &K {
        &self.root
    }

    /// The content element key.
    pub fn content(&self) -> &K {
        &self.content
    }

    /// Classes for the document body.
    pub fn body_classes(&self) -> Vec<&'static str> {
        if self.body_open() {
            alloc::vec!["modal-open"]
        } else {
            Vec::new()
        }
    }

    /// Classes for the root element.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = alloc::vec!["modal"];
        if self.options.transition {
            classes.push("fade");
        }
        if self.show_class {
            classes.push("show");
        }
        if self.is_shaking() {
            classes.push("modal-static");
        }
        classes
    }

    /// Classes for the dialog element.
    pub fn dialog_classes(&self) -> Vec<String> {
        let mut classes = alloc::vec![String::from("modal-dialog")];
        if self.options.alignment == ModalAlignment::Center {
            classes.push("modal-dialog-centered".into());
        }
        match self.options.fullscreen {
            Fullscreen::Off => {}
            Fullscreen::Always => classes.push("modal-fullscreen".into()),
            Fullscreen::Below(bp) => classes.push(format!("modal-fullscreen-{bp}-down")),
        }
        if self.options.scrollable {
            classes.push("modal-dialog-scrollable".into());
        }
        if let Some(size) = self.options.size {
            classes.push(format!("modal-{size}"));
        }
        classes
    }

    /// Classes for the content element.
    pub fn content_classes(&self) -> Vec<String> {
        let mut classes = alloc::vec![String::from("modal-content")];
        if let Some(extra) = &self.options.class_name {
            classes.extend(extra.split_whitespace().map(String::from));
        }
        classes
    }

    fn enter(&mut self, now: Duration) {
        self.phase = ModalPhase::Entering;
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.set_visible(true, now);
        }
        if self.options.transition {
            self.show_at.arm(now, SHOW_DELAY);
        } else {
            self.show_class = true;
            self.after_enter();
        }
    }

    fn after_enter(&mut self) {
        self.phase = ModalPhase::Shown;
        if let Some(scope) = &mut self.scope {
            scope.open(ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_UP);
        }
    }

    fn leave(&mut self, now: Duration) {
        self.phase = ModalPhase::Leaving;
        self.show_class = false;
        self.show_at.cancel();
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.set_visible(false, now);
        }
        if !self.options.transition {
            self.after_leave();
        }
    }

    fn after_leave(&mut self) {
        self.phase = ModalPhase::Hidden;
        self.shake.cancel();
        if let Some(scope) = &mut self.scope {
            scope.close();
        }
        let animated = self.options.transition;
        if let Some(backdrop) = self.backdrop.as_mut().filter(|_| !animated) {
            backdrop.transition_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Breakpoint;
    use crate::options::ModalSize;

    const MS: Duration = Duration::from_millis(1);

    // 1 root ── 2 dialog ── 3 content ── 4 close button
    // 10 page
    struct Page;
    impl ParentLookup<u32> for Page {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                2 => Some(1),
                3 => Some(2),
                4 => Some(3),
                _ => None,
            }
        }
    }

    fn shown(options: ModalOptions, listeners: &Listeners) -> Modal<u32> {
        let mut modal = Modal::new(options, 1, 3);
        modal.mount(listeners, Duration::ZERO);
        modal.set_visible(true, Duration::ZERO);
        modal.tick(SHOW_DELAY);
        modal.transition_end();
        modal
    }

    fn click(target: u32) -> UiEvent<u32> {
        UiEvent::PointerDown { target }
    }

    fn escape(target: u32) -> UiEvent<u32> {
        UiEvent::KeyUp {
            target,
            key: Key::Escape,
        }
    }

    #[test]
    fn enter_defers_show_and_listeners() {
        let listeners = Listeners::new();
        let mut modal = Modal::new(ModalOptions::default(), 1_u32, 3);
        modal.mount(&listeners, Duration::ZERO);
        assert!(!modal.is_displayed());

        assert_eq!(modal.set_visible(true, 5 * MS), Transition::Opened);
        assert_eq!(modal.phase(), ModalPhase::Entering);
        assert!(modal.is_displayed());
        assert_eq!(modal.body_classes(), ["modal-open"]);
        assert_eq!(modal.root_classes(), ["modal", "fade"]);
        assert!(listeners.is_empty());

        assert!(modal.tick(6 * MS));
        assert_eq!(modal.root_classes(), ["modal", "fade", "show"]);
        modal.transition_end();
        assert_eq!(modal.phase(), ModalPhase::Shown);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn leave_removes_listeners_after_fade() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        assert_eq!(modal.set_visible(false, 10 * MS), Transition::Closed);
        assert_eq!(modal.phase(), ModalPhase::Leaving);
        assert!(modal.body_classes().is_empty());
        assert!(!modal.root_classes().contains(&"show"));
        assert!(modal.is_displayed());
        assert_eq!(listeners.len(), 1);

        modal.transition_end();
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert!(!modal.is_displayed());
        assert!(listeners.is_empty());
    }

    #[test]
    fn without_transition_phases_complete_immediately() {
        let listeners = Listeners::new();
        let options = ModalOptions {
            transition: false,
            ..Default::default()
        };
        let mut modal = Modal::new(options, 1_u32, 3);
        modal.mount(&listeners, Duration::ZERO);
        modal.set_visible(true, Duration::ZERO);
        assert_eq!(modal.phase(), ModalPhase::Shown);
        assert_eq!(modal.root_classes(), ["modal", "show"]);
        assert_eq!(listeners.len(), 1);

        modal.set_visible(false, MS);
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert!(listeners.is_empty());
        assert!(!modal.backdrop().is_some_and(Backdrop::is_rendered));
    }

    #[test]
    fn visible_option_enters_on_mount() {
        let listeners = Listeners::new();
        let options = ModalOptions {
            visible: true,
            ..Default::default()
        };
        let mut modal = Modal::new(options, 1_u32, 3);
        assert!(!modal.is_visible());
        modal.mount(&listeners, Duration::ZERO);
        assert!(modal.is_visible());
        assert_eq!(modal.phase(), ModalPhase::Entering);
    }

    #[test]
    fn outside_click_dismisses_inside_click_does_not() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        assert_eq!(modal.handle_event(&Page, &click(4), MS), ModalOutcome::Ignored);
        assert_eq!(modal.handle_event(&Page, &click(1), MS), ModalOutcome::Dismissed);
        assert_eq!(modal.handle_event(&Page, &click(10), MS), ModalOutcome::Dismissed);
        // Controlled: still visible until the host hides it.
        assert!(modal.is_visible());
    }

    #[test]
    fn escape_respects_keyboard_option() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        assert_eq!(modal.handle_event(&Page, &escape(10), MS), ModalOutcome::Dismissed);
        let other = UiEvent::KeyUp {
            target: 10,
            key: Key::Enter,
        };
        assert_eq!(modal.handle_event(&Page, &other, MS), ModalOutcome::Ignored);

        let options = ModalOptions {
            keyboard: false,
            ..Default::default()
        };
        let mut modal = shown(options, &listeners);
        assert_eq!(modal.handle_event(&Page, &escape(10), MS), ModalOutcome::Ignored);
    }

    #[test]
    fn escape_inside_content_is_ignored() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        assert_eq!(modal.handle_event(&Page, &escape(4), MS), ModalOutcome::Ignored);
        assert_eq!(modal.handle_event(&Page, &escape(3), MS), ModalOutcome::Ignored);
        // The dialog wrapper sits outside the content element.
        assert_eq!(modal.handle_event(&Page, &escape(2), MS), ModalOutcome::Dismissed);

        let options = ModalOptions {
            backdrop: BackdropMode::Static,
            ..Default::default()
        };
        let mut modal = shown(options, &listeners);
        assert_eq!(modal.handle_event(&Page, &escape(4), MS), ModalOutcome::Ignored);
        assert!(!modal.is_shaking());
    }

    #[test]
    fn shown_before_mount_registers_on_mount() {
        let listeners = Listeners::new();
        let options = ModalOptions {
            transition: false,
            ..Default::default()
        };
        let mut modal = Modal::new(options, 1_u32, 3);
        modal.set_visible(true, Duration::ZERO);
        assert_eq!(modal.phase(), ModalPhase::Shown);
        assert!(listeners.is_empty());

        modal.mount(&listeners, MS);
        assert_eq!(listeners.len(), 1);
        assert_eq!(modal.handle_event(&Page, &click(10), MS), ModalOutcome::Dismissed);
    }

    #[test]
    fn entering_before_mount_registers_when_enter_completes() {
        let listeners = Listeners::new();
        let mut modal = Modal::new(ModalOptions::default(), 1_u32, 3);
        modal.set_visible(true, Duration::ZERO);
        modal.mount(&listeners, Duration::ZERO);
        assert_eq!(modal.phase(), ModalPhase::Entering);
        assert!(listeners.is_empty());
        modal.tick(SHOW_DELAY);
        modal.transition_end();
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn static_backdrop_shakes_for_300ms() {
        let listeners = Listeners::new();
        let options = ModalOptions {
            backdrop: BackdropMode::Static,
            ..Default::default()
        };
        let mut modal = shown(options, &listeners);
        assert_eq!(modal.handle_event(&Page, &click(10), 100 * MS), ModalOutcome::Shaken);
        assert!(modal.root_classes().contains(&"modal-static"));
        assert!(!modal.tick(399 * MS));
        assert!(modal.tick(400 * MS));
        assert!(!modal.root_classes().contains(&"modal-static"));
        assert_eq!(modal.handle_event(&Page, &escape(10), 500 * MS), ModalOutcome::Shaken);
        assert!(modal.is_visible());
    }

    #[test]
    fn dismiss_option_hides_itself() {
        let listeners = Listeners::new();
        let options = ModalOptions {
            dismiss: true,
            ..Default::default()
        };
        let mut modal = shown(options, &listeners);
        assert_eq!(modal.handle_event(&Page, &click(10), MS), ModalOutcome::Dismissed);
        assert!(!modal.is_visible());
        assert_eq!(modal.phase(), ModalPhase::Leaving);
    }

    #[test]
    fn events_before_enter_completes_are_ignored() {
        let listeners = Listeners::new();
        let mut modal = Modal::new(ModalOptions::default(), 1_u32, 3);
        modal.mount(&listeners, Duration::ZERO);
        modal.set_visible(true, Duration::ZERO);
        assert_eq!(modal.handle_event(&Page, &click(10), MS), ModalOutcome::Ignored);
    }

    #[test]
    fn unmount_releases_everything() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        modal.unmount();
        assert!(listeners.is_empty());
        assert!(!modal.is_mounted());
        assert!(!modal.is_displayed());
        assert!(!modal.backdrop().is_some_and(Backdrop::is_rendered));
    }

    #[test]
    fn backdrop_follows_modal() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        let backdrop = modal.backdrop().unwrap();
        assert_eq!(backdrop.classes(), ["modal-backdrop", "fade", "show"]);
        modal.set_visible(false, MS);
        assert!(!modal.backdrop().unwrap().is_visible());

        let options = ModalOptions {
            backdrop: BackdropMode::Disabled,
            ..Default::default()
        };
        assert!(Modal::new(options, 1_u32, 3).backdrop().is_none());
    }

    #[test]
    fn dialog_and_content_classes() {
        let options = ModalOptions {
            alignment: ModalAlignment::Center,
            fullscreen: Fullscreen::Below(Breakpoint::Md),
            scrollable: true,
            size: Some(ModalSize::Lg),
            class_name: Some("wide  tall".into()),
            ..Default::default()
        };
        let modal = Modal::new(options, 1_u32, 3);
        assert_eq!(
            modal.dialog_classes(),
            [
                "modal-dialog",
                "modal-dialog-centered",
                "modal-fullscreen-md-down",
                "modal-dialog-scrollable",
                "modal-lg"
            ]
        );
        assert_eq!(modal.content_classes(), ["modal-content", "wide", "tall"]);

        let options = ModalOptions {
            fullscreen: Fullscreen::Always,
            ..Default::default()
        };
        assert_eq!(
            Modal::new(options, 1_u32, 3).dialog_classes(),
            ["modal-dialog", "modal-fullscreen"]
        );
    }

    #[test]
    fn reopening_while_leaving_reenters() {
        let listeners = Listeners::new();
        let mut modal = shown(ModalOptions::default(), &listeners);
        modal.set_visible(false, MS);
        modal.set_visible(true, 2 * MS);
        assert_eq!(modal.phase(), ModalPhase::Entering);
        assert_eq!(listeners.len(), 1);
        modal.tick(3 * MS);
        modal.transition_end();
        assert_eq!(modal.phase(), ModalPhase::Shown);
        assert_eq!(listeners.len(), 1);
    }
}
