// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal lifecycle.
//!
//! Drives a static-backdrop modal through enter, a blocked outside click, the shake timeout,
//! and leave, against a simulated clock.
//!
//! Run:
//! - `cargo run -p trellis_demos --example modal_lifecycle`

use core::time::Duration;

use trellis_popup::{
    Listeners, Modal, ModalOptions, ModalOutcome, ParentLookup, STATIC_SHAKE, UiEvent,
};

// 1 modal ── 2 dialog ── 3 content; 10 page
struct Page;
impl ParentLookup<u32> for Page {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        match node {
            2 => Some(1),
            3 => Some(2),
            _ => None,
        }
    }
}

fn print(label: &str, now: Duration, modal: &Modal<u32>) {
    println!(
        "{:>5}ms {label:<18} {:?} root={:?} body={:?} backdrop={:?}",
        now.as_millis(),
        modal.phase(),
        modal.root_classes(),
        modal.body_classes(),
        modal.backdrop().map(|b| b.classes()),
    );
}

fn main() {
    let options: ModalOptions =
        serde_json::from_str(r#"{"backdrop": "static", "alignment": "center", "size": "lg"}"#)
            .expect("valid options");
    let listeners = Listeners::new();
    let mut modal = Modal::new(options, 1_u32, 3);
    modal.mount(&listeners, Duration::ZERO);
    println!("dialog: {:?}", modal.dialog_classes());

    let mut now = Duration::ZERO;
    modal.set_visible(true, now);
    print("show", now, &modal);

    now += Duration::from_millis(1);
    modal.tick(now);
    print("next frame", now, &modal);

    now += Duration::from_millis(150);
    modal.transition_end();
    print("fade done", now, &modal);

    let outcome = modal.handle_event(&Page, &UiEvent::PointerDown { target: 10 }, now);
    assert_eq!(outcome, ModalOutcome::Shaken);
    print("outside click", now, &modal);

    now += STATIC_SHAKE;
    modal.tick(now);
    print("shake over", now, &modal);

    modal.set_visible(false, now);
    print("hide", now, &modal);
    modal.transition_end();
    print("fade done", now, &modal);
    println!("registrations left: {}", listeners.len());
}
