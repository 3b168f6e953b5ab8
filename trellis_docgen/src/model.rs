// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event descriptors as emitted by component metadata extraction.

use serde::{Deserialize, Deserializer};

/// One event a component emits.
///
/// Every field tolerates being absent or `null`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventDescriptor {
    /// Event name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form description; may span lines.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Payload properties. `None` and an empty list render the same.
    pub properties: Option<Vec<EventProperty>>,
}

/// One property of an event payload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventProperty {
    /// Property name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Property description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Property type. Untyped properties are not rendered.
    #[serde(rename = "type")]
    pub ty: Option<TypeInfo>,
}

/// Type names of a property, e.g. `["string", "number"]`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TypeInfo {
    /// Alternative type names.
    #[serde(deserialize_with = "null_as_default")]
    pub names: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
