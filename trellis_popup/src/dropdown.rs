// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown: visibility controller, positioning adapter, and outside dismissal wired together.
//!
//! ## Lifecycle
//!
//! 1. [`Dropdown::new`] resolves the placement from the options and creates a detached
//!    adapter. Nothing is registered yet.
//! 2. [`Dropdown::mount`] joins a [`Listeners`] table. If the dropdown starts visible, it opens
//!    immediately.
//! 3. On every open transition the dropdown registers pointer-down and key-up listeners and,
//!    when positioning applies, attaches the adapter. On every close it deregisters and
//!    detaches.
//! 4. [`Dropdown::unmount`] (or dropping the dropdown) releases everything.
//!
//! While mounted, the adapter is attached exactly when the dropdown is visible, positioning is
//! requested, and alignment is not responsive.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;
use trellis_placement::{Placement, PlacementEngine, PlacementResult, PositioningAdapter};

use crate::alignment::{Align, Alignment};
use crate::context::{ConfigView, PopupConfig};
use crate::controller::{Transition, VisibilityController};
use crate::listeners::{InstanceId, ListenerKinds, ListenerScope, Listeners};
use crate::options::{Direction, DropdownOptions, Triggers, Variant};
use crate::outside::{ParentLookup, UiEvent, is_outside};

/// Resolve the initial placement of a dropdown menu.
///
/// Direction overrides the requested placement; `end` alignment overrides both.
///
/// ```
/// use trellis_placement::Placement;
/// use trellis_popup::{resolve_placement, Align, Alignment, Direction};
///
/// let p = Placement::BottomStart;
/// assert_eq!(resolve_placement(p, Some(Direction::Dropup), None), Placement::TopStart);
/// assert_eq!(resolve_placement(p, Some(Direction::Dropend), None), Placement::RightStart);
/// assert_eq!(resolve_placement(p, Some(Direction::Dropstart), None), Placement::LeftStart);
///
/// let end = Alignment::Simple(Align::End);
/// assert_eq!(resolve_placement(p, None, Some(&end)), Placement::BottomEnd);
/// assert_eq!(resolve_placement(p, Some(Direction::Dropup), Some(&end)), Placement::BottomEnd);
/// ```
pub fn resolve_placement(
    requested: Placement,
    direction: Option<Direction>,
    alignment: Option<&Alignment>,
) -> Placement {
    let mut placement = match direction {
        Some(Direction::Dropup) => Placement::TopStart,
        Some(Direction::Dropend) => Placement::RightStart,
        Some(Direction::Dropstart) => Placement::LeftStart,
        None => requested,
    };
    if alignment == Some(&Alignment::Simple(Align::End)) {
        placement = Placement::BottomEnd;
    }
    placement
}

/// What descendants of a dropdown (toggle, menu, items) can see.
#[derive(Clone, Debug)]
pub struct DropdownContext {
    config: ConfigView,
    variant: Variant,
}

impl DropdownContext {
    /// The shared configuration.
    pub fn config(&self) -> &ConfigView {
        &self.config
    }

    /// The wrapper flavor.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether the menu is open.
    pub fn visible(&self) -> bool {
        self.config.visible()
    }

    /// Classes for the menu element.
    pub fn menu_classes(&self) -> Vec<String> {
        let config = self.config.get();
        let mut classes = alloc::vec![String::from("dropdown-menu")];
        if config.dark {
            classes.push("dropdown-menu-dark".into());
        }
        if config.visible {
            classes.push("show".into());
        }
        if let Some(alignment) = &config.alignment {
            classes.extend(alignment.menu_classes());
        }
        classes
    }
}

/// A dropdown over element keys `K`, positioned by engine `E`.
///
/// `root` is the dropdown's wrapper element: interactions inside it never dismiss the menu,
/// and it is the anchor of the positioning binding. `menu` is the floating element.
pub struct Dropdown<K, E: PlacementEngine<K>> {
    controller: VisibilityController,
    adapter: PositioningAdapter<K, E>,
    scope: Option<ListenerScope>,
    root: K,
    menu: K,
    placement: Placement,
    direction: Option<Direction>,
    variant: Variant,
    caret: bool,
    triggers: Triggers,
}

impl<K, E: PlacementEngine<K>> core::fmt::Debug for Dropdown<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dropdown")
            .field("controller", &self.controller)
            .field("adapter", &self.adapter)
            .field("scope", &self.scope)
            .field("placement", &self.placement)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + PartialEq, E: PlacementEngine<K>> Dropdown<K, E> {
    /// Create an unmounted dropdown.
    pub fn new(options: DropdownOptions, root: K, menu: K, engine: E) -> Self {
        let placement = resolve_placement(
            options.placement,
            options.direction,
            options.alignment.as_ref(),
        );
        let config = PopupConfig {
            alignment: options.alignment,
            dark: options.dark,
            use_positioning: options.use_positioning,
            visible: options.visible,
        };
        Self {
            controller: VisibilityController::new(config, options.disabled),
            adapter: PositioningAdapter::new(engine),
            scope: None,
            root,
            menu,
            placement,
            direction: options.direction,
            variant: options.variant,
            caret: options.caret,
            triggers: options.trigger,
        }
    }

    /// Join `listeners`. Opens immediately when the dropdown starts visible. No-op if mounted.
    pub fn mount(&mut self, listeners: &Listeners) {
        if self.scope.is_some() {
            return;
        }
        let scope = ListenerScope::new(listeners);
        debug!(id = ?scope.id(), "dropdown mounted");
        self.scope = Some(scope);
        if self.controller.is_visible() {
            self.apply(Transition::Opened);
        }
    }

    /// Leave the listener table and release the positioning binding. Visibility is kept.
    pub fn unmount(&mut self) {
        if let Some(scope) = self.scope.take() {
            debug!(id = ?scope.id(), "dropdown unmounted");
        }
        self.adapter.detach();
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    /// Identity in the listener table while mounted.
    pub fn id(&self) -> Option<InstanceId> {
        self.scope.as_ref().map(ListenerScope::id)
    }

    /// Flip visibility unless disabled.
    pub fn toggle(&mut self) -> Transition {
        let t = self.controller.toggle();
        self.apply(t)
    }

    /// Close unless disabled.
    pub fn hide(&mut self) -> Transition {
        let t = self.controller.hide();
        self.apply(t)
    }

    /// Open unless disabled.
    pub fn show(&mut self) -> Transition {
        let t = self.controller.show();
        self.apply(t)
    }

    /// Set visibility from the host, ignoring the disabled flag.
    pub fn set_visible(&mut self, visible: bool) -> Transition {
        let t = self.controller.set_visible(visible);
        self.apply(t)
    }

    /// Enable or disable user toggling.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    /// Feed a window event. Interactions outside the root close the menu.
    ///
    /// Events are ignored unless this dropdown is currently listening (mounted and open).
    pub fn handle_event<P: ParentLookup<K> + ?Sized>(
        &mut self,
        tree: &P,
        event: &UiEvent<K>,
    ) -> Transition {
        let listening = self.scope.as_ref().is_some_and(|s| {
            s.is_open() && s.listeners().kinds_of(s.id()).intersects(event.kind())
        });
        if !listening || !is_outside(tree, &self.root, event) {
            return Transition::Unchanged;
        }
        self.hide()
    }

    /// Recompute the menu position, e.g. after scrolling or relayout.
    pub fn update_position(&mut self) -> Option<&PlacementResult> {
        self.adapter.update()
    }

    /// Context for descendants.
    pub fn context(&self) -> DropdownContext {
        DropdownContext {
            config: self.controller.view(),
            variant: self.variant,
        }
    }

    /// Whether the menu is open.
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Resolved placement requested from the engine.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Latest computed menu position, while attached.
    pub fn placement_result(&self) -> Option<&PlacementResult> {
        self.adapter.result()
    }

    /// The positioning adapter.
    pub fn adapter(&self) -> &PositioningAdapter<K, E> {
        &self.adapter
    }

    /// Toggle events configured for this dropdown.
    pub fn triggers(&self) -> Triggers {
        self.triggers
    }

    /// The wrapper flavor.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Classes for the wrapper element, or `None` when no wrapper is rendered (`input-group`).
    pub fn wrapper_classes(&self) -> Option<Vec<&'static str>> {
        let mut classes = match self.variant {
            Variant::InputGroup => return None,
            Variant::NavItem => alloc::vec!["nav-item", "dropdown"],
            v => alloc::vec![v.as_str()],
        };
        if let Some(direction) = self.direction {
            classes.push(direction.as_str());
        }
        Some(classes)
    }

    /// Classes for the toggle element.
    pub fn toggle_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.caret {
            classes.push("dropdown-toggle");
        }
        if self.is_visible() {
            classes.push("show");
        }
        classes
    }

    /// Classes for the menu element.
    pub fn menu_classes(&self) -> Vec<String> {
        self.context().menu_classes()
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        let Some(scope) = self.scope.as_mut() else {
            return transition;
        };
        match transition {
            Transition::Opened => {
                scope.open(ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_UP);
                if self.controller.config().positioning_enabled() {
                    self.adapter
                        .attach(self.root.clone(), self.menu.clone(), self.placement);
                }
            }
            Transition::Closed => {
                scope.close();
                self.adapter.detach();
            }
            Transition::Unchanged => {}
        }
        transition
    }
}
