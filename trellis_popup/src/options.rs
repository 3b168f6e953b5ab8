// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component options: the declarative configuration surface of [`Dropdown`](crate::Dropdown)
//! and [`Modal`](crate::Modal).
//!
//! Every option struct implements [`Default`] with the component defaults and
//! [`Deserialize`] with camelCase keys, so hosts can pass props as JSON. Missing keys take
//! their defaults.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use trellis_placement::Placement;

use crate::alignment::{Alignment, Breakpoint};

/// An option value was rejected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid value `{value}` for option `{option}`")]
pub struct ParseOptionError {
    option: &'static str,
    value: String,
}

impl ParseOptionError {
    pub(crate) fn new(option: &'static str, value: &str) -> Self {
        Self {
            option,
            value: value.to_string(),
        }
    }

    /// Name of the rejected option.
    pub fn option(&self) -> &'static str {
        self.option
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

macro_rules! string_enum {
    ($name:ident, $option:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// The option string.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseOptionError::new($option, s)),
                }
            }
        }
    };
}

/// Direction the dropdown menu opens in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Above the toggle.
    Dropup,
    /// Right of the toggle.
    Dropend,
    /// Left of the toggle.
    Dropstart,
}

string_enum!(Direction, "direction", {
    Dropup => "dropup",
    Dropend => "dropend",
    Dropstart => "dropstart",
});

/// Wrapper flavor of a dropdown.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Inside a button group.
    #[default]
    BtnGroup,
    /// Plain dropdown.
    Dropdown,
    /// Inside an input group; renders no wrapper.
    InputGroup,
    /// Inside a nav.
    NavItem,
}

string_enum!(Variant, "variant", {
    BtnGroup => "btn-group",
    Dropdown => "dropdown",
    InputGroup => "input-group",
    NavItem => "nav-item",
});

bitflags::bitflags! {
    /// Events on the toggle that open and close a dropdown.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Toggle on click.
        const CLICK = 0b0000_0001;
        /// Open on focus, close on blur.
        const FOCUS = 0b0000_0010;
        /// Open on pointer enter, close on pointer leave.
        const HOVER = 0b0000_0100;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::CLICK
    }
}

impl FromStr for Triggers {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(Self::CLICK),
            "focus" => Ok(Self::FOCUS),
            "hover" => Ok(Self::HOVER),
            _ => Err(ParseOptionError::new("trigger", s)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TriggersRepr {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for Triggers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = match TriggersRepr::deserialize(deserializer)? {
            TriggersRepr::One(name) => alloc::vec![name],
            TriggersRepr::Many(names) => names,
        };
        names.iter().try_fold(Self::empty(), |acc, name| {
            name.parse::<Self>()
                .map(|t| acc | t)
                .map_err(D::Error::custom)
        })
    }
}

/// Options of a [`Dropdown`](crate::Dropdown).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownOptions {
    /// Menu alignment. Responsive alignment disables automatic positioning.
    pub alignment: Option<Alignment>,
    /// Show a caret on the toggle.
    pub caret: bool,
    /// Dark menu to match a dark navbar.
    pub dark: bool,
    /// Direction the menu opens in.
    pub direction: Option<Direction>,
    /// Ignore toggle and hide requests.
    pub disabled: bool,
    /// Requested placement before direction and alignment overrides.
    pub placement: Placement,
    /// Position the menu with the placement engine. Accepts `popper` as an alias.
    #[serde(alias = "popper")]
    pub use_positioning: bool,
    /// Toggle events.
    pub trigger: Triggers,
    /// Wrapper flavor.
    pub variant: Variant,
    /// Initial visibility.
    pub visible: bool,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            alignment: None,
            caret: true,
            dark: false,
            direction: None,
            disabled: false,
            placement: Placement::BottomStart,
            use_positioning: true,
            trigger: Triggers::CLICK,
            variant: Variant::BtnGroup,
            visible: false,
        }
    }
}

/// Vertical alignment of a modal dialog.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalAlignment {
    /// Near the top of the viewport.
    #[default]
    Top,
    /// Vertically centered.
    Center,
}

string_enum!(ModalAlignment, "alignment", {
    Top => "top",
    Center => "center",
});

/// Modal backdrop behavior.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BackdropMode {
    /// No backdrop.
    Disabled,
    /// Backdrop shown; outside clicks dismiss the modal.
    #[default]
    Dismissible,
    /// Backdrop shown; outside clicks shake the modal instead of dismissing it.
    Static,
}

impl BackdropMode {
    /// Returns `true` unless [`Disabled`](Self::Disabled).
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl<'de> Deserialize<'de> for BackdropMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match BoolOrString::deserialize(deserializer)? {
            BoolOrString::Bool(true) => Ok(Self::Dismissible),
            BoolOrString::Bool(false) => Ok(Self::Disabled),
            BoolOrString::String(s) if s == "static" => Ok(Self::Static),
            BoolOrString::String(s) => Err(D::Error::custom(ParseOptionError::new("backdrop", &s))),
        }
    }
}

/// Fullscreen behavior of a modal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Fullscreen {
    /// Never fullscreen.
    #[default]
    Off,
    /// Always fullscreen.
    Always,
    /// Fullscreen below the given breakpoint. `xs` is not accepted.
    Below(Breakpoint),
}

impl FromStr for Fullscreen {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Breakpoint>() {
            Ok(Breakpoint::Xs) | Err(_) => Err(ParseOptionError::new("fullscreen", s)),
            Ok(b) => Ok(Self::Below(b)),
        }
    }
}

impl<'de> Deserialize<'de> for Fullscreen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match BoolOrString::deserialize(deserializer)? {
            BoolOrString::Bool(true) => Ok(Self::Always),
            BoolOrString::Bool(false) => Ok(Self::Off),
            BoolOrString::String(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    String(String),
}

/// Modal dialog size.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    /// Small.
    Sm,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

string_enum!(ModalSize, "size", {
    Sm => "sm",
    Lg => "lg",
    Xl => "xl",
});

/// Options of a [`Modal`](crate::Modal).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalOptions {
    /// Dialog alignment.
    pub alignment: ModalAlignment,
    /// Backdrop behavior.
    pub backdrop: BackdropMode,
    /// Extra classes for the content element.
    pub class_name: Option<String>,
    /// Fullscreen behavior.
    pub fullscreen: Fullscreen,
    /// Escape dismisses the modal.
    pub keyboard: bool,
    /// Hide the modal on dismiss in addition to reporting it.
    pub dismiss: bool,
    /// Scroll the body inside the dialog.
    pub scrollable: bool,
    /// Dialog size.
    pub size: Option<ModalSize>,
    /// Animate enter and leave.
    pub transition: bool,
    /// Initial visibility.
    pub visible: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            alignment: ModalAlignment::Top,
            backdrop: BackdropMode::Dismissible,
            class_name: None,
            fullscreen: Fullscreen::Off,
            keyboard: true,
            dismiss: false,
            scrollable: false,
            size: None,
            transition: true,
            visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{Align, ResponsiveAlignment};

    #[test]
    fn dropdown_defaults() {
        let o = DropdownOptions::default();
        assert!(o.caret);
        assert!(o.use_positioning);
        assert_eq!(o.placement, Placement::BottomStart);
        assert_eq!(o.trigger, Triggers::CLICK);
        assert_eq!(o.variant, Variant::BtnGroup);
        assert!(!o.visible && !o.disabled && !o.dark);
    }

    #[test]
    fn dropdown_from_json_props() {
        let o: DropdownOptions = serde_json::from_str(
            r#"{
                "alignment": { "lg": "end" },
                "direction": "dropup",
                "placement": "top-end",
                "popper": false,
                "trigger": ["click", "focus"],
                "variant": "nav-item"
            }"#,
        )
        .unwrap();
        assert_eq!(
            o.alignment,
            Some(Alignment::Responsive(
                ResponsiveAlignment::new().with(Breakpoint::Lg, Align::End)
            ))
        );
        assert_eq!(o.direction, Some(Direction::Dropup));
        assert_eq!(o.placement, Placement::TopEnd);
        assert!(!o.use_positioning);
        assert_eq!(o.trigger, Triggers::CLICK | Triggers::FOCUS);
        assert_eq!(o.variant, Variant::NavItem);
        assert!(o.caret);
    }

    #[test]
    fn single_trigger_string() {
        let o: DropdownOptions = serde_json::from_str(r#"{ "trigger": "hover" }"#).unwrap();
        assert_eq!(o.trigger, Triggers::HOVER);
        assert!(serde_json::from_str::<DropdownOptions>(r#"{ "trigger": "press" }"#).is_err());
    }

    #[test]
    fn rejects_unknown_enum_values() {
        assert!(serde_json::from_str::<DropdownOptions>(r#"{ "direction": "dropdown" }"#).is_err());
        assert!(serde_json::from_str::<DropdownOptions>(r#"{ "placement": "middle" }"#).is_err());
        assert!(serde_json::from_str::<ModalOptions>(r#"{ "size": "md" }"#).is_err());
    }

    #[test]
    fn modal_defaults_and_json() {
        let d = ModalOptions::default();
        assert_eq!(d.backdrop, BackdropMode::Dismissible);
        assert!(d.keyboard && d.transition);

        let o: ModalOptions = serde_json::from_str(
            r#"{
                "alignment": "center",
                "backdrop": "static",
                "className": "wide",
                "fullscreen": "md",
                "keyboard": false,
                "size": "xl"
            }"#,
        )
        .unwrap();
        assert_eq!(o.alignment, ModalAlignment::Center);
        assert_eq!(o.backdrop, BackdropMode::Static);
        assert_eq!(o.class_name.as_deref(), Some("wide"));
        assert_eq!(o.fullscreen, Fullscreen::Below(Breakpoint::Md));
        assert!(!o.keyboard);
        assert_eq!(o.size, Some(ModalSize::Xl));
        assert!(o.transition);
    }

    #[test]
    fn backdrop_and_fullscreen_accept_bools() {
        let o: ModalOptions =
            serde_json::from_str(r#"{ "backdrop": false, "fullscreen": true }"#).unwrap();
        assert_eq!(o.backdrop, BackdropMode::Disabled);
        assert_eq!(o.fullscreen, Fullscreen::Always);
        assert!(serde_json::from_str::<ModalOptions>(r#"{ "backdrop": "dynamic" }"#).is_err());
        assert!(serde_json::from_str::<ModalOptions>(r#"{ "fullscreen": "xs" }"#).is_err());
    }

    #[test]
    fn parse_errors_name_the_option() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.option(), "direction");
        assert_eq!(err.value(), "sideways");
        assert_eq!(
            alloc::format!("{err}"),
            "invalid value `sideways` for option `direction`"
        );
    }
}
