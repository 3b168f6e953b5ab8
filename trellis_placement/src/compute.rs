// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement computation over kurbo rectangles.
//!
//! ## Steps
//!
//! 1. Resolve `auto*` placements to the side with the most room in the viewport
//!    (bottom when no viewport is known).
//! 2. Position the floating rectangle against that side and apply the [`Offset`].
//! 3. Flip to the opposite side when the preferred side overflows the viewport on the
//!    main axis and the opposite side overflows less.
//! 4. Shift along the cross axis to keep the floating rectangle inside the viewport.
//!
//! All inputs are assumed to be finite. Without a viewport only steps 1 and 2 apply.

use kurbo::{Point, Rect, Size};

use crate::types::{Placement, PlacementResult, Side, Variation};

/// Displacement applied after the base position is computed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offset {
    /// Along the cross axis (positive is right for vertical sides, down for horizontal sides).
    pub skidding: f64,
    /// Away from the anchor along the main axis.
    pub distance: f64,
}

/// Options for [`compute_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComputeOptions {
    /// Offset from the anchor.
    pub offset: Offset,
    /// Visible area used for `auto`, flip, and shift. `None` disables all three.
    pub viewport: Option<Rect>,
    /// Flip to the opposite side on main-axis overflow.
    pub flip: bool,
    /// Shift along the cross axis to stay inside the viewport.
    pub shift: bool,
    /// Minimum gap kept between the floating rectangle and the viewport edges.
    pub padding: f64,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            viewport: None,
            flip: true,
            shift: true,
            padding: 0.0,
        }
    }
}

/// Compute where a floating element of `floating` size goes relative to `anchor`.
///
/// ```
/// use kurbo::{Rect, Size, Point};
/// use trellis_placement::{compute_position, ComputeOptions, Placement};
///
/// let anchor = Rect::new(10.0, 10.0, 110.0, 40.0);
/// let out = compute_position(
///     anchor,
///     Size::new(80.0, 50.0),
///     Placement::BottomEnd,
///     &ComputeOptions::default(),
/// );
/// assert_eq!(out.origin, Point::new(30.0, 40.0));
/// assert_eq!(out.placement, Placement::BottomEnd);
/// ```
pub fn compute_position(
    anchor: Rect,
    floating: Size,
    placement: Placement,
    options: &ComputeOptions,
) -> PlacementResult {
    let variation = placement.variation();
    let side = match placement.side() {
        Some(side) => side,
        None => roomiest_side(anchor, options.viewport),
    };

    let mut side = side;
    let mut origin = offset_origin(anchor, floating, side, variation, options.offset);

    if let Some(viewport) = options.viewport {
        let bounds = viewport.inset(-options.padding);
        if options.flip {
            let here = main_overflow(Rect::from_origin_size(origin, floating), side, bounds);
            if here > 0.0 {
                let other = side.opposite();
                let other_origin =
                    offset_origin(anchor, floating, other, variation, options.offset);
                let other_rect = Rect::from_origin_size(other_origin, floating);
                let there = main_overflow(other_rect, other, bounds);
                if there < here {
                    side = other;
                    origin = other_origin;
                }
            }
        }
        if options.shift {
            origin = shift_into(origin, floating, side, bounds);
        }
    }

    PlacementResult {
        origin,
        size: floating,
        placement: Placement::from_parts(side, variation),
    }
}

fn base_origin(anchor: Rect, floating: Size, side: Side, variation: Variation) -> Point {
    let cross_x = match variation {
        Variation::Start => anchor.x0,
        Variation::Center => anchor.center().x - floating.width / 2.0,
        Variation::End => anchor.x1 - floating.width,
    };
    let cross_y = match variation {
        Variation::Start => anchor.y0,
        Variation::Center => anchor.center().y - floating.height / 2.0,
        Variation::End => anchor.y1 - floating.height,
    };
    match side {
        Side::Top => Point::new(cross_x, anchor.y0 - floating.height),
        Side::Bottom => Point::new(cross_x, anchor.y1),
        Side::Left => Point::new(anchor.x0 - floating.width, cross_y),
        Side::Right => Point::new(anchor.x1, cross_y),
    }
}

fn offset_origin(
    anchor: Rect,
    floating: Size,
    side: Side,
    variation: Variation,
    offset: Offset,
) -> Point {
    let p = base_origin(anchor, floating, side, variation);
    match side {
        Side::Top => Point::new(p.x + offset.skidding, p.y - offset.distance),
        Side::Bottom => Point::new(p.x + offset.skidding, p.y + offset.distance),
        Side::Left => Point::new(p.x - offset.distance, p.y + offset.skidding),
        Side::Right => Point::new(p.x + offset.distance, p.y + offset.skidding),
    }
}

/// Available room between the anchor and the viewport edge on each side.
fn room(anchor: Rect, viewport: Rect, side: Side) -> f64 {
    match side {
        Side::Top => anchor.y0 - viewport.y0,
        Side::Bottom => viewport.y1 - anchor.y1,
        Side::Left => anchor.x0 - viewport.x0,
        Side::Right => viewport.x1 - anchor.x1,
    }
}

fn roomiest_side(anchor: Rect, viewport: Option<Rect>) -> Side {
    let Some(viewport) = viewport else {
        return Side::Bottom;
    };
    // Earlier entries win ties.
    let order = [Side::Bottom, Side::Top, Side::Right, Side::Left];
    let mut best = order[0];
    let mut best_room = room(anchor, viewport, best);
    for side in &order[1..] {
        let r = room(anchor, viewport, *side);
        if r > best_room {
            best = *side;
            best_room = r;
        }
    }
    best
}

/// How far `rect` sticks out of `bounds` on the far end of the main axis for `side`.
fn main_overflow(rect: Rect, side: Side, bounds: Rect) -> f64 {
    let over = match side {
        Side::Top => bounds.y0 - rect.y0,
        Side::Bottom => rect.y1 - bounds.y1,
        Side::Left => bounds.x0 - rect.x0,
        Side::Right => rect.x1 - bounds.x1,
    };
    over.max(0.0)
}

fn shift_into(origin: Point, floating: Size, side: Side, bounds: Rect) -> Point {
    // The start edge wins when the floating element is larger than the bounds.
    if side.is_vertical() {
        let x = origin.x.min(bounds.x1 - floating.width).max(bounds.x0);
        Point::new(x, origin.y)
    } else {
        let y = origin.y.min(bounds.y1 - floating.height).max(bounds.y0);
        Point::new(origin.x, y)
    }
}
