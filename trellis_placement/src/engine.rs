// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement engines: the seam between the adapter and whatever computes coordinates.

use kurbo::Rect;

use crate::compute::{ComputeOptions, compute_position};
use crate::types::{Placement, PlacementResult};

/// Computes placements for element keys `K`.
///
/// Implement this to substitute a different placement backend (a browser positioning
/// library, a layout engine, a test double). The [`PositioningAdapter`](crate::PositioningAdapter)
/// calls [`on_attach`](Self::on_attach) once per binding, [`compute`](Self::compute) on attach and
/// on every update, and [`on_detach`](Self::on_detach) when the binding is released.
pub trait PlacementEngine<K> {
    /// Compute the placement of `floating` relative to `anchor`.
    ///
    /// Returns `None` when either element cannot be measured.
    fn compute(&self, anchor: &K, floating: &K, placement: Placement) -> Option<PlacementResult>;

    /// Called when a binding between `anchor` and `floating` is created.
    fn on_attach(&mut self, _anchor: &K, _floating: &K) {}

    /// Called when the binding between `anchor` and `floating` is released.
    fn on_detach(&mut self, _anchor: &K, _floating: &K) {}
}

/// Look up the world-space bounds of an element.
pub trait BoundsLookup<K> {
    /// Returns the bounds of `node`, or `None` if it is not laid out.
    fn bounds_of(&self, node: &K) -> Option<Rect>;
}

/// Built-in engine: measures elements through a [`BoundsLookup`] and runs
/// [`compute_position`].
#[derive(Clone, Debug)]
pub struct RectEngine<L> {
    lookup: L,
    options: ComputeOptions,
}

impl<L> RectEngine<L> {
    /// Create an engine with default [`ComputeOptions`].
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            options: ComputeOptions::default(),
        }
    }

    /// Create an engine with explicit options.
    pub fn with_options(lookup: L, options: ComputeOptions) -> Self {
        Self { lookup, options }
    }

    /// The bounds lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Mutable access to the bounds lookup, e.g. after a relayout.
    pub fn lookup_mut(&mut self) -> &mut L {
        &mut self.lookup
    }

    /// Current options.
    pub fn options(&self) -> &ComputeOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next compute.
    pub fn set_options(&mut self, options: ComputeOptions) {
        self.options = options;
    }
}

impl<K, L: BoundsLookup<K>> PlacementEngine<K> for RectEngine<L> {
    fn compute(&self, anchor: &K, floating: &K, placement: Placement) -> Option<PlacementResult> {
        let anchor = self.lookup.bounds_of(anchor)?;
        let floating = self.lookup.bounds_of(floating)?;
        Some(compute_position(
            anchor,
            floating.size(),
            placement,
            &self.options,
        ))
    }
}
