// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "Events" section of a component page.

use crate::model::{EventDescriptor, EventProperty};

/// Where the component sits in its page.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    /// The component is documented under a parent component.
    pub is_sub_component: bool,
    /// The component documents sub-components under itself.
    pub has_sub_components: bool,
}

impl RenderOptions {
    fn nested(self) -> bool {
        self.is_sub_component || self.has_sub_components
    }
}

/// Make `input` safe inside a table cell: line breaks become `<br>` and pipes are escaped.
///
/// ```
/// assert_eq!(trellis_docgen::md_clean("a|b\r\nc"), "a\\|b<br>c");
/// ```
pub fn md_clean(input: &str) -> String {
    input
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('|', "\\|")
}

/// Render payload properties, one per line.
///
/// Untyped properties render as empty lines, keeping their position.
pub fn format_properties(properties: &[EventProperty]) -> String {
    properties
        .iter()
        .map(|property| match &property.ty {
            None => String::new(),
            Some(ty) => format!(
                "**{}** `{}` - {}",
                property.name,
                ty.names.join(", "),
                property.description
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one table row per event, each terminated by a newline.
pub fn render_rows(events: &[EventDescriptor]) -> String {
    let mut rows = String::new();
    for event in events {
        let properties = event
            .properties
            .as_deref()
            .map(format_properties)
            .unwrap_or_default();
        rows.push_str(&format!(
            "| <code>{}</code> | {} | {}\n",
            md_clean(&event.name),
            md_clean(&properties),
            md_clean(&event.description)
        ));
    }
    rows
}

/// Render the complete "Events" section.
pub fn render_events(events: &[EventDescriptor], options: RenderOptions) -> String {
    let heading = if options.nested() { "#" } else { "" };
    format!(
        "\n{heading}#### Events\n\n  \
         | Event name     | Properties     | Description  |\n  \
         | -------------- |--------------- | -------------|\n  \
         {rows}\n  ",
        rows = render_rows(events)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeInfo;
    use pretty_assertions::assert_eq;

    fn event(
        name: &str,
        description: &str,
        properties: Option<Vec<EventProperty>>,
    ) -> EventDescriptor {
        EventDescriptor {
            name: name.into(),
            description: description.into(),
            properties,
        }
    }

    fn typed(name: &str, types: &[&str], description: &str) -> EventProperty {
        EventProperty {
            name: name.into(),
            description: description.into(),
            ty: Some(TypeInfo {
                names: types.iter().map(|t| (*t).into()).collect(),
            }),
        }
    }

    #[test]
    fn pipes_and_newlines_are_escaped() {
        let rows = render_rows(&[event("a|b", "x\ny", Some(Vec::new()))]);
        assert_eq!(rows, "| <code>a\\|b</code> |  | x<br>y\n");
    }

    #[test]
    fn properties_render_types_and_skip_untyped() {
        let props = [
            typed("value", &["string", "number"], "New value."),
            EventProperty {
                name: "raw".into(),
                ..Default::default()
            },
            typed("flag", &[], "On?"),
        ];
        assert_eq!(
            format_properties(&props),
            "**value** `string, number` - New value.\n\n**flag** `` - On?"
        );
    }

    #[test]
    fn multiline_properties_collapse_into_one_cell() {
        let rows = render_rows(&[event(
            "change",
            "Changed.",
            Some(vec![typed("a", &["A"], "first"), typed("b", &["B|C"], "second")]),
        )]);
        assert_eq!(
            rows,
            "| <code>change</code> | **a** `A` - first<br>**b** `B\\|C` - second | Changed.\n"
        );
    }

    #[test]
    fn section_layout() {
        let out = render_events(&[event("dismiss", "Closed.", None)], RenderOptions::default());
        assert_eq!(
            out,
            "\n#### Events\n\n  | Event name     | Properties     | Description  |\n  \
             | -------------- |--------------- | -------------|\n  \
             | <code>dismiss</code> |  | Closed.\n\n  "
        );
    }

    #[test]
    fn nested_components_get_a_deeper_heading() {
        let sub = RenderOptions {
            is_sub_component: true,
            ..Default::default()
        };
        let parent = RenderOptions {
            has_sub_components: true,
            ..Default::default()
        };
        assert!(render_events(&[], sub).starts_with("\n##### Events\n"));
        assert!(render_events(&[], parent).starts_with("\n##### Events\n"));
    }

    #[test]
    fn empty_event_list_renders_header_only() {
        let out = render_events(&[], RenderOptions::default());
        assert!(out.ends_with("|--------------- | -------------|\n  \n  "));
    }
}
