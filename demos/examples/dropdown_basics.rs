// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown basics.
//!
//! Mounts a dropdown against a tiny page, toggles it open, routes window events through the
//! listener table, and prints classes and placement along the way.
//!
//! Run:
//! - `cargo run -p trellis_demos --example dropdown_basics`
//! - `RUST_LOG=trace cargo run -p trellis_demos --example dropdown_basics`

use kurbo::Rect;
use trellis_placement::{BoundsLookup, ComputeOptions, RectEngine};
use trellis_popup::{
    Align, Alignment, Direction, Dropdown, DropdownOptions, Key, Listeners, ParentLookup, UiEvent,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(u32);

// 1 wrapper ─┬─ 2 toggle
//            └─ 3 menu ── 4 item
// 10 page
struct Page;

impl ParentLookup<Node> for Page {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        match node.0 {
            2 | 3 => Some(Node(1)),
            4 => Some(Node(3)),
            _ => None,
        }
    }
}

impl BoundsLookup<Node> for Page {
    fn bounds_of(&self, node: &Node) -> Option<Rect> {
        match node.0 {
            1 => Some(Rect::new(40.0, 40.0, 140.0, 70.0)),
            3 => Some(Rect::new(0.0, 0.0, 180.0, 120.0)),
            _ => None,
        }
    }
}

type PageDropdown = Dropdown<Node, RectEngine<Page>>;

fn dispatch(listeners: &Listeners, dropdown: &mut PageDropdown, event: UiEvent<Node>) {
    let receivers = listeners.instances(event.kind());
    if dropdown.id().is_some_and(|id| receivers.contains(&id)) {
        let t = dropdown.handle_event(&Page, &event);
        println!("  {event:?} -> {t:?}");
    } else {
        println!("  {event:?} -> not listening");
    }
}

fn print_state(dropdown: &PageDropdown) {
    println!("  wrapper: {:?}", dropdown.wrapper_classes());
    println!("  toggle:  {:?}", dropdown.toggle_classes());
    println!("  menu:    {:?}", dropdown.menu_classes());
    match dropdown.placement_result() {
        Some(r) => println!("  placed {} at ({:.0}, {:.0})", r.placement, r.origin.x, r.origin.y),
        None => println!("  not positioned"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let listeners = Listeners::new();
    let options = DropdownOptions {
        alignment: Some(Alignment::Simple(Align::End)),
        direction: Some(Direction::Dropup),
        dark: true,
        ..Default::default()
    };
    let engine = RectEngine::with_options(
        Page,
        ComputeOptions {
            viewport: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
            ..Default::default()
        },
    );
    let mut dropdown = Dropdown::new(options, Node(1), Node(3), engine);
    dropdown.mount(&listeners);

    println!("== Closed ==");
    print_state(&dropdown);
    dispatch(&listeners, &mut dropdown, UiEvent::PointerDown { target: Node(10) });

    println!("== Toggle ==");
    dropdown.toggle();
    print_state(&dropdown);
    if let Some(id) = dropdown.id() {
        println!("  listening: {:?}", listeners.kinds_of(id));
    }

    println!("== Inside click, then Escape outside ==");
    dispatch(&listeners, &mut dropdown, UiEvent::PointerDown { target: Node(4) });
    dispatch(
        &listeners,
        &mut dropdown,
        UiEvent::KeyUp {
            target: Node(10),
            key: Key::Escape,
        },
    );
    print_state(&dropdown);
    println!("  registrations left: {}", listeners.len());
}
