// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while generating documentation.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// Reading the descriptor input failed.
    #[error("failed to read {}: {source}", display_path(path.as_ref()))]
    Read {
        /// Input file; `None` for stdin.
        path: Option<PathBuf>,
        /// Underlying error.
        source: io::Error,
    },
    /// Writing the rendered markdown failed.
    #[error("failed to write {}: {source}", display_path(path.as_ref()))]
    Write {
        /// Output file; `None` for stdout.
        path: Option<PathBuf>,
        /// Underlying error.
        source: io::Error,
    },
    /// The input is not a JSON array of event descriptors.
    #[error("invalid event descriptors: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "standard stream".to_owned(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_stream() {
        let err = DocgenError::Read {
            path: None,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read standard stream: gone");

        let err = DocgenError::Write {
            path: Some(PathBuf::from("out.md")),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out.md: denied");
    }

    #[test]
    fn json_errors_convert() {
        let err: DocgenError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid event descriptors:"));
    }
}
