// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning adapter: a live binding between an anchor and a floating element.
//!
//! ## State machine
//!
//! ```text
//! Detached --attach()--> Attached --detach()--> Detached
//!                        Attached --attach()--> (detach, then attach) --> Attached
//! ```
//!
//! [`detach`](PositioningAdapter::detach) is idempotent. Attaching while already attached
//! releases the previous binding first, so an engine never observes two live bindings from
//! the same adapter. Dropping an attached adapter detaches it.

use tracing::{debug, trace};

use crate::engine::PlacementEngine;
use crate::types::{Placement, PlacementResult};

/// Adapter lifecycle state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AdapterState {
    /// No binding.
    Detached,
    /// A binding is live.
    Attached,
}

#[derive(Clone, Debug)]
struct Binding<K> {
    anchor: K,
    floating: K,
    placement: Placement,
    result: Option<PlacementResult>,
}

/// Owns a [`PlacementEngine`] and at most one live binding.
///
/// ## Usage
///
/// - Call [`attach`](Self::attach) when the popup opens; the initial placement is computed
///   immediately.
/// - Call [`update`](Self::update) when the anchor moves or the viewport changes.
/// - Call [`detach`](Self::detach) when the popup closes.
///
/// ```
/// use kurbo::Rect;
/// use trellis_placement::{AdapterState, BoundsLookup, Placement, PositioningAdapter, RectEngine};
///
/// struct Layout;
/// impl BoundsLookup<&'static str> for Layout {
///     fn bounds_of(&self, node: &&'static str) -> Option<Rect> {
///         match *node {
///             "toggle" => Some(Rect::new(0.0, 0.0, 80.0, 30.0)),
///             "menu" => Some(Rect::new(0.0, 0.0, 120.0, 90.0)),
///             _ => None,
///         }
///     }
/// }
///
/// let mut adapter = PositioningAdapter::new(RectEngine::new(Layout));
/// adapter.attach("toggle", "menu", Placement::BottomStart);
/// assert_eq!(adapter.state(), AdapterState::Attached);
/// assert_eq!(adapter.reference(), Some(&"toggle"));
/// assert_eq!(adapter.result().unwrap().origin.y, 30.0);
///
/// adapter.detach();
/// adapter.detach();
/// assert!(adapter.result().is_none());
/// ```
pub struct PositioningAdapter<K, E: PlacementEngine<K>> {
    engine: E,
    binding: Option<Binding<K>>,
}

impl<K, E: PlacementEngine<K>> core::fmt::Debug for PositioningAdapter<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositioningAdapter")
            .field("attached", &self.binding.is_some())
            .field("placement", &self.binding.as_ref().map(|b| b.placement))
            .finish_non_exhaustive()
    }
}

impl<K, E: PlacementEngine<K>> PositioningAdapter<K, E> {
    /// Create a detached adapter around `engine`.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            binding: None,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine. Call [`update`](Self::update) afterwards if the change
    /// affects the live binding.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AdapterState {
        if self.binding.is_some() {
            AdapterState::Attached
        } else {
            AdapterState::Detached
        }
    }

    /// Returns `true` while a binding is live.
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Bind `floating` to `anchor` at `placement` and compute the initial position.
    ///
    /// Any previous binding is released first.
    pub fn attach(
        &mut self,
        anchor: K,
        floating: K,
        placement: Placement,
    ) -> Option<&PlacementResult> {
        if self.binding.is_some() {
            trace!("attach while attached; releasing previous binding");
            self.detach();
        }
        self.engine.on_attach(&anchor, &floating);
        let result = self.engine.compute(&anchor, &floating, placement);
        debug!(%placement, computed = ?result.map(|r| r.placement), "positioning attached");
        let binding = self.binding.insert(Binding {
            anchor,
            floating,
            placement,
            result,
        });
        binding.result.as_ref()
    }

    /// Recompute the live binding. Returns `None` when detached or unmeasurable.
    pub fn update(&mut self) -> Option<&PlacementResult> {
        let binding = self.binding.as_mut()?;
        binding.result = self
            .engine
            .compute(&binding.anchor, &binding.floating, binding.placement);
        trace!(computed = ?binding.result.map(|r| r.placement), "positioning updated");
        binding.result.as_ref()
    }

    /// Release the live binding. Returns `true` if there was one.
    pub fn detach(&mut self) -> bool {
        let Some(binding) = self.binding.take() else {
            return false;
        };
        self.engine.on_detach(&binding.anchor, &binding.floating);
        debug!(placement = %binding.placement, "positioning detached");
        true
    }

    /// Anchor of the live binding.
    pub fn reference(&self) -> Option<&K> {
        self.binding.as_ref().map(|b| &b.anchor)
    }

    /// Floating element of the live binding.
    pub fn floating(&self) -> Option<&K> {
        self.binding.as_ref().map(|b| &b.floating)
    }

    /// Requested placement of the live binding.
    pub fn placement(&self) -> Option<Placement> {
        self.binding.as_ref().map(|b| b.placement)
    }

    /// Most recently computed result of the live binding.
    pub fn result(&self) -> Option<&PlacementResult> {
        self.binding.as_ref().and_then(|b| b.result.as_ref())
    }
}

impl<K, E: PlacementEngine<K>> Drop for PositioningAdapter<K, E> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use kurbo::{Point, Size};

    #[derive(Debug, Default)]
    struct Recorder {
        log: Vec<(&'static str, u32, u32)>,
    }

    impl PlacementEngine<u32> for Recorder {
        fn compute(
            &self,
            anchor: &u32,
            _floating: &u32,
            placement: Placement,
        ) -> Option<PlacementResult> {
            (*anchor != 0).then(|| PlacementResult {
                origin: Point::new(f64::from(*anchor), 0.0),
                size: Size::new(10.0, 10.0),
                placement,
            })
        }

        fn on_attach(&mut self, anchor: &u32, floating: &u32) {
            self.log.push(("attach", *anchor, *floating));
        }

        fn on_detach(&mut self, anchor: &u32, floating: &u32) {
            self.log.push(("detach", *anchor, *floating));
        }
    }

    #[test]
    fn attach_then_detach() {
        let mut adapter = PositioningAdapter::new(Recorder::default());
        assert_eq!(adapter.state(), AdapterState::Detached);
        let out = adapter.attach(1, 2, Placement::TopEnd).copied();
        assert_eq!(out.map(|r| r.placement), Some(Placement::TopEnd));
        assert_eq!(adapter.state(), AdapterState::Attached);
        assert_eq!(adapter.reference(), Some(&1));
        assert_eq!(adapter.floating(), Some(&2));
        assert_eq!(adapter.placement(), Some(Placement::TopEnd));
        assert!(adapter.detach());
        assert_eq!(adapter.state(), AdapterState::Detached);
        assert_eq!(adapter.engine().log, [("attach", 1, 2), ("detach", 1, 2)]);
    }

    #[test]
    fn detach_is_idempotent() {
        let mut adapter = PositioningAdapter::new(Recorder::default());
        assert!(!adapter.detach());
        adapter.attach(1, 2, Placement::Top);
        assert!(adapter.detach());
        assert!(!adapter.detach());
        assert_eq!(adapter.engine().log.len(), 2);
    }

    #[test]
    fn reattach_releases_the_previous_binding_first() {
        let mut adapter = PositioningAdapter::new(Recorder::default());
        adapter.attach(1, 2, Placement::Top);
        adapter.attach(3, 4, Placement::Left);
        assert_eq!(
            adapter.engine().log,
            [("attach", 1, 2), ("detach", 1, 2), ("attach", 3, 4)]
        );
        assert_eq!(adapter.reference(), Some(&3));
    }

    #[test]
    fn update_recomputes_only_while_attached() {
        let mut adapter = PositioningAdapter::new(Recorder::default());
        assert!(adapter.update().is_none());
        adapter.attach(5, 6, Placement::Bottom);
        assert_eq!(adapter.update().map(|r| r.origin.x), Some(5.0));
    }

    #[test]
    fn unmeasurable_binding_is_still_attached() {
        let mut adapter = PositioningAdapter::new(Recorder::default());
        assert!(adapter.attach(0, 1, Placement::Bottom).is_none());
        assert!(adapter.is_attached());
        assert!(adapter.result().is_none());
    }

    /// Counts live bindings in a cell that outlives the adapter.
    struct Counting(Rc<Cell<i32>>);

    impl PlacementEngine<u32> for Counting {
        fn compute(&self, _: &u32, _: &u32, _: Placement) -> Option<PlacementResult> {
            None
        }

        fn on_attach(&mut self, _: &u32, _: &u32) {
            self.0.set(self.0.get() + 1);
        }

        fn on_detach(&mut self, _: &u32, _: &u32) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn dropping_an_attached_adapter_detaches() {
        let live = Rc::new(Cell::new(0));
        let mut adapter = PositioningAdapter::new(Counting(Rc::clone(&live)));
        adapter.attach(1, 2, Placement::Bottom);
        adapter.attach(1, 2, Placement::Top);
        assert_eq!(live.get(), 1);
        drop(adapter);
        assert_eq!(live.get(), 0);

        let mut adapter = PositioningAdapter::new(Counting(Rc::clone(&live)));
        adapter.attach(1, 2, Placement::Bottom);
        adapter.detach();
        drop(adapter);
        assert_eq!(live.get(), 0);
    }
}
