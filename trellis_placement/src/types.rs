// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary: sides, variations, logical placements, and computed results.
//!
//! ## Overview
//!
//! A [`Placement`] is the logical position of a floating element relative to its anchor,
//! spelled the way popup libraries spell it (`"bottom-start"`, `"left"`, `"auto-end"`).
//! It splits into an optional [`Side`] (absent for `auto*`) and a [`Variation`] along the
//! cross axis. [`PlacementResult`] is what a [`PlacementEngine`](crate::PlacementEngine)
//! produces from it.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Side of the anchor the floating element is placed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// The side across the anchor.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Top`](Self::Top) and [`Bottom`](Self::Bottom).
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment of the floating element along the cross axis of its [`Side`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Variation {
    /// Align leading edges.
    Start,
    /// Center on the anchor.
    #[default]
    Center,
    /// Align trailing edges.
    End,
}

/// Logical placement of a floating element relative to its anchor.
///
/// Parses from and formats to the usual kebab-case names. The default is
/// [`BottomStart`](Self::BottomStart).
///
/// ```
/// use trellis_placement::{Placement, Side, Variation};
///
/// let p: Placement = "right-start".parse().unwrap();
/// assert_eq!(p.side(), Some(Side::Right));
/// assert_eq!(p.variation(), Variation::Start);
/// assert_eq!(p.to_string(), "right-start");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Side with the most room, centered.
    Auto,
    /// Side with the most room, start-aligned.
    AutoStart,
    /// Side with the most room, end-aligned.
    AutoEnd,
    /// Above, centered.
    Top,
    /// Above, start-aligned.
    TopStart,
    /// Above, end-aligned.
    TopEnd,
    /// Below, centered.
    Bottom,
    /// Below, start-aligned.
    #[default]
    BottomStart,
    /// Below, end-aligned.
    BottomEnd,
    /// Right, centered.
    Right,
    /// Right, start-aligned.
    RightStart,
    /// Right, end-aligned.
    RightEnd,
    /// Left, centered.
    Left,
    /// Left, start-aligned.
    LeftStart,
    /// Left, end-aligned.
    LeftEnd,
}

impl Placement {
    /// Every placement, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Auto,
        Self::AutoStart,
        Self::AutoEnd,
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
    ];

    /// Build a placement from a side and a variation.
    pub const fn from_parts(side: Side, variation: Variation) -> Self {
        match (side, variation) {
            (Side::Top, Variation::Start) => Self::TopStart,
            (Side::Top, Variation::Center) => Self::Top,
            (Side::Top, Variation::End) => Self::TopEnd,
            (Side::Bottom, Variation::Start) => Self::BottomStart,
            (Side::Bottom, Variation::Center) => Self::Bottom,
            (Side::Bottom, Variation::End) => Self::BottomEnd,
            (Side::Right, Variation::Start) => Self::RightStart,
            (Side::Right, Variation::Center) => Self::Right,
            (Side::Right, Variation::End) => Self::RightEnd,
            (Side::Left, Variation::Start) => Self::LeftStart,
            (Side::Left, Variation::Center) => Self::Left,
            (Side::Left, Variation::End) => Self::LeftEnd,
        }
    }

    /// The side, or `None` for the `auto*` placements.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Auto | Self::AutoStart | Self::AutoEnd => None,
            Self::Top | Self::TopStart | Self::TopEnd => Some(Side::Top),
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Some(Side::Bottom),
            Self::Right | Self::RightStart | Self::RightEnd => Some(Side::Right),
            Self::Left | Self::LeftStart | Self::LeftEnd => Some(Side::Left),
        }
    }

    /// The cross-axis variation.
    pub const fn variation(self) -> Variation {
        match self {
            Self::AutoStart
            | Self::TopStart
            | Self::BottomStart
            | Self::RightStart
            | Self::LeftStart => Variation::Start,
            Self::AutoEnd | Self::TopEnd | Self::BottomEnd | Self::RightEnd | Self::LeftEnd => {
                Variation::End
            }
            Self::Auto | Self::Top | Self::Bottom | Self::Right | Self::Left => Variation::Center,
        }
    }

    /// Returns `true` for the `auto*` placements.
    pub const fn is_auto(self) -> bool {
        self.side().is_none()
    }

    /// The same variation on the opposite side. `auto*` placements are returned unchanged.
    pub const fn flipped(self) -> Self {
        match self.side() {
            Some(side) => Self::from_parts(side.opposite(), self.variation()),
            None => self,
        }
    }

    /// The kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AutoStart => "auto-start",
            Self::AutoEnd => "auto-end",
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`Placement`] name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown placement `{0}`")]
pub struct ParsePlacementError(pub alloc::string::String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePlacementError(s.into()))
    }
}

/// Computed position of a floating element.
///
/// Produced by [`compute_position`](crate::compute_position) and stored by the
/// [`PositioningAdapter`](crate::PositioningAdapter) while a binding is live.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Top-left corner of the floating element in the anchor's coordinate space.
    pub origin: Point,
    /// Size of the floating element.
    pub size: Size,
    /// Placement actually used after `auto` resolution and flipping. Never an `auto*` variant.
    pub placement: Placement,
}

impl PlacementResult {
    /// The floating element's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}
