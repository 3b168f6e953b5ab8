// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu alignment: a single start/end value or a per-breakpoint mapping.
//!
//! Responsive alignment is resolved by the stylesheet at each breakpoint, so it disables
//! automatic positioning: see [`PopupConfig::positioning_enabled`](crate::PopupConfig::positioning_enabled).

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::options::ParseOptionError;

/// Responsive breakpoints, smallest first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Extra small (no media query).
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// Extra extra large.
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint, smallest first.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// The lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseOptionError::new("breakpoint", s))
    }
}

/// Start or end alignment of a menu against its toggle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Leading edges aligned.
    #[default]
    Start,
    /// Trailing edges aligned.
    End,
}

impl Align {
    /// The lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl FromStr for Align {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(ParseOptionError::new("alignment", s)),
        }
    }
}

/// Per-breakpoint alignment overrides.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ResponsiveAlignment {
    slots: [Option<Align>; 6],
}

impl ResponsiveAlignment {
    /// An empty mapping. Not a valid alignment until at least one breakpoint is set.
    pub const fn new() -> Self {
        Self { slots: [None; 6] }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, align: Align) -> Self {
        self.set(breakpoint, align);
        self
    }

    /// Set the alignment at `breakpoint`.
    pub fn set(&mut self, breakpoint: Breakpoint, align: Align) {
        self.slots[breakpoint.slot()] = Some(align);
    }

    /// The alignment at `breakpoint`, if set.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<Align> {
        self.slots[breakpoint.slot()]
    }

    /// Set entries, smallest breakpoint first.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, Align)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|b| self.get(b).map(|a| (b, a)))
    }

    /// Returns `true` when no breakpoint is set.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Alignment option of a dropdown.
///
/// ```
/// use trellis_popup::{Align, Alignment, Breakpoint, ResponsiveAlignment};
///
/// let simple = Alignment::Simple(Align::End);
/// assert_eq!(simple.menu_classes(), ["dropdown-menu-end"]);
///
/// let responsive = Alignment::Responsive(
///     ResponsiveAlignment::new()
///         .with(Breakpoint::Xs, Align::End)
///         .with(Breakpoint::Lg, Align::Start),
/// );
/// assert!(responsive.is_responsive());
/// assert_eq!(responsive.menu_classes(), ["dropdown-menu-end", "dropdown-menu-lg-start"]);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "AlignmentRepr")]
pub enum Alignment {
    /// One alignment at every width.
    Simple(Align),
    /// Alignment overridden per breakpoint.
    Responsive(ResponsiveAlignment),
}

impl Alignment {
    /// Returns `true` for [`Responsive`](Self::Responsive).
    pub fn is_responsive(&self) -> bool {
        matches!(self, Self::Responsive(_))
    }

    /// Simple alignments are always valid; responsive ones need at least one breakpoint.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Simple(_) => true,
            Self::Responsive(r) => !r.is_empty(),
        }
    }

    /// Menu classes implementing this alignment. `xs` has no infix.
    pub fn menu_classes(&self) -> Vec<String> {
        match self {
            Self::Simple(a) => alloc::vec![format!("dropdown-menu-{}", a.as_str())],
            Self::Responsive(r) => r
                .iter()
                .map(|(b, a)| match b {
                    Breakpoint::Xs => format!("dropdown-menu-{}", a.as_str()),
                    _ => format!("dropdown-menu-{}-{}", b.as_str(), a.as_str()),
                })
                .collect(),
        }
    }
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        Self::Simple(align)
    }
}

impl FromStr for Alignment {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::Simple)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AlignmentRepr {
    Simple(Align),
    Responsive(BTreeMap<String, String>),
}

impl TryFrom<AlignmentRepr> for Alignment {
    type Error = ParseOptionError;

    fn try_from(repr: AlignmentRepr) -> Result<Self, Self::Error> {
        match repr {
            AlignmentRepr::Simple(a) => Ok(Self::Simple(a)),
            AlignmentRepr::Responsive(map) => {
                // Unknown entries are skipped, matching `is_valid_responsive_alignment`.
                let mut r = ResponsiveAlignment::new();
                for (b, a) in &map {
                    match (b.parse::<Breakpoint>(), a.parse::<Align>()) {
                        (Ok(b), Ok(a)) => r.set(b, a),
                        _ => debug!(breakpoint = %b, alignment = %a, "ignoring alignment entry"),
                    }
                }
                if r.is_empty() {
                    return Err(ParseOptionError::new("alignment", "{}"));
                }
                Ok(Self::Responsive(r))
            }
        }
    }
}
