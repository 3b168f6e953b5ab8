// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Positions one menu against toggles at different spots of an 800×600 viewport and shows
//! how flip and shift keep it on screen.
//!
//! Run:
//! - `cargo run -p trellis_demos --example placement_flip`

use kurbo::{Rect, Size};
use trellis_placement::{ComputeOptions, Offset, Placement, compute_position};

fn main() {
    let menu = Size::new(160.0, 200.0);
    let options = ComputeOptions {
        offset: Offset {
            skidding: 0.0,
            distance: 2.0,
        },
        viewport: Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
        ..Default::default()
    };

    let toggles = [
        ("top-left", Rect::new(10.0, 10.0, 110.0, 40.0)),
        ("bottom-left", Rect::new(10.0, 560.0, 110.0, 590.0)),
        ("bottom-right", Rect::new(700.0, 560.0, 790.0, 590.0)),
    ];
    for placement in [Placement::BottomStart, Placement::RightStart, Placement::Auto] {
        println!("== {placement} ==");
        for (name, toggle) in toggles {
            let out = compute_position(toggle, menu, placement, &options);
            println!(
                "  {name:<12} -> {:<12} origin=({:.0}, {:.0})",
                out.placement, out.origin.x, out.origin.y
            );
        }
    }
}
