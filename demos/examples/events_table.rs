// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events table.
//!
//! Renders the events section for a modal and for a sub-component, the same way the
//! `trellis-docgen` binary does.
//!
//! Run:
//! - `cargo run -p trellis_demos --example events_table`

use trellis_docgen::{RenderOptions, parse_events, render_events};

const MODAL_EVENTS: &str = r#"[
    {
        "name": "dismiss",
        "description": "Outside click or Escape.\nNot fired with a static backdrop."
    },
    {
        "name": "visible-change",
        "description": "Visibility changed.",
        "properties": [
            {
                "name": "visible",
                "type": {"names": ["boolean"]},
                "description": "New state | old state flipped."
            }
        ]
    }
]"#;

fn main() -> Result<(), trellis_docgen::DocgenError> {
    let events = parse_events(MODAL_EVENTS)?;
    print!("{}", render_events(&events, RenderOptions::default()));

    let sub = RenderOptions {
        is_sub_component: true,
        ..Default::default()
    };
    print!("{}", render_events(&events[..1], sub));
    Ok(())
}
