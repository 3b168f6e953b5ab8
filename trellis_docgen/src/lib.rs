// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_docgen --heading-base-level=0

//! Trellis Docgen: markdown event tables for component documentation.
//!
//! Component metadata extraction produces a list of event descriptors
//! (`{name, description, properties}`); this crate renders them as the "Events" section of a
//! component page. Cells are made table-safe with [`md_clean`].
//!
//! ```rust
//! use trellis_docgen::{EventDescriptor, RenderOptions, render_events};
//!
//! let events: Vec<EventDescriptor> =
//!     serde_json::from_str(r#"[{"name": "dismiss", "description": "Closed by the user."}]"#)?;
//! let section = render_events(&events, RenderOptions::default());
//! assert!(section.contains("| <code>dismiss</code> |  | Closed by the user.\n"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! The `trellis-docgen` binary wraps [`generate`] for use from build scripts.

mod error;
mod markdown;
mod model;

use std::io::{Read, Write};

use tracing::debug;

pub use error::DocgenError;
pub use markdown::{RenderOptions, format_properties, md_clean, render_events, render_rows};
pub use model::{EventDescriptor, EventProperty, TypeInfo};

/// Parse a JSON array of event descriptors.
pub fn parse_events(json: &str) -> Result<Vec<EventDescriptor>, DocgenError> {
    Ok(serde_json::from_str(json)?)
}

/// Read descriptors from `input` and write the rendered section to `output`.
///
/// I/O failures are reported without a path; callers that know one attach it.
pub fn generate<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: RenderOptions,
) -> Result<(), DocgenError> {
    let mut json = String::new();
    input
        .read_to_string(&mut json)
        .map_err(|source| DocgenError::Read { path: None, source })?;
    let events = parse_events(&json)?;
    debug!(count = events.len(), ?options, "rendering events");
    output
        .write_all(render_events(&events, options).as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| DocgenError::Write { path: None, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_reads_and_writes() {
        let input = br#"[{"name": "a|b", "description": "x\ny", "properties": []}]"#;
        let mut out = Vec::new();
        generate(&input[..], &mut out, RenderOptions::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("| <code>a\\|b</code> |  | x<br>y\n"));
    }

    #[test]
    fn generate_rejects_non_arrays() {
        let err = generate(&b"{}"[..], Vec::new(), RenderOptions::default()).unwrap_err();
        assert!(matches!(err, DocgenError::Json(_)));
    }

    #[test]
    fn parse_events_accepts_empty_list() {
        assert_eq!(parse_events("[]").unwrap(), Vec::new());
    }
}
