// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option validators.
//!
//! One boolean predicate per option that accepts a string value, for hosts that receive
//! props untyped. They accept or reject; use the `FromStr` impls when you need the parsed
//! value or an error naming the option.

use trellis_placement::Placement;

use crate::alignment::{Align, Breakpoint};
use crate::options::{Direction, Fullscreen, ModalAlignment, ModalSize, Triggers, Variant};

/// `start` or `end`.
pub fn is_valid_alignment(value: &str) -> bool {
    value.parse::<Align>().is_ok()
}

/// A breakpoint map with at least one known breakpoint set to `start` or `end`.
///
/// Entries with unknown breakpoints or values are ignored, as long as one entry is valid.
///
/// ```
/// use trellis_popup::validate::is_valid_responsive_alignment;
///
/// assert!(is_valid_responsive_alignment([("md", "end"), ("huge", "end")]));
/// assert!(!is_valid_responsive_alignment([("md", "middle")]));
/// assert!(!is_valid_responsive_alignment(Vec::<(&str, &str)>::new()));
/// ```
pub fn is_valid_responsive_alignment<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> bool {
    entries
        .into_iter()
        .any(|(b, a)| b.parse::<Breakpoint>().is_ok() && is_valid_alignment(a))
}

/// `dropup`, `dropend`, or `dropstart`.
pub fn is_valid_direction(value: &str) -> bool {
    value.parse::<Direction>().is_ok()
}

/// One of the fifteen placement names.
pub fn is_valid_placement(value: &str) -> bool {
    value.parse::<Placement>().is_ok()
}

/// `click`, `focus`, or `hover`.
pub fn is_valid_trigger(value: &str) -> bool {
    value.parse::<Triggers>().is_ok()
}

/// `btn-group`, `dropdown`, `input-group`, or `nav-item`.
pub fn is_valid_variant(value: &str) -> bool {
    value.parse::<Variant>().is_ok()
}

/// `top` or `center`.
pub fn is_valid_modal_alignment(value: &str) -> bool {
    value.parse::<ModalAlignment>().is_ok()
}

/// `sm`, `md`, `lg`, `xl`, or `xxl`. Boolean fullscreen values are always valid.
pub fn is_valid_fullscreen(value: &str) -> bool {
    value.parse::<Fullscreen>().is_ok()
}

/// `sm`, `lg`, or `xl`.
pub fn is_valid_modal_size(value: &str) -> bool {
    value.parse::<ModalSize>().is_ok()
}

/// `static`. Boolean backdrop values are always valid.
pub fn is_valid_backdrop(value: &str) -> bool {
    value == "static"
}
