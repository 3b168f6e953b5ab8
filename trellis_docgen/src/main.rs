// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `trellis-docgen`: render a component's events section from JSON descriptors.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trellis_docgen::{DocgenError, RenderOptions, generate};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options.
struct Cli {
    /// JSON array of event descriptors. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Markdown destination. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The component is documented under a parent component.
    #[arg(long, default_value_t = false)]
    sub_component: bool,

    /// The component documents its own sub-components.
    #[arg(long, default_value_t = false)]
    has_sub_components: bool,
}

fn main() -> Result<(), DocgenError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = RenderOptions {
        is_sub_component: cli.sub_component,
        has_sub_components: cli.has_sub_components,
    };

    let input: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(|source| {
            DocgenError::Read {
                path: Some(path.clone()),
                source,
            }
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn io::Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|source| {
            DocgenError::Write {
                path: Some(path.clone()),
                source,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    generate(input, output, options).map_err(|err| with_paths(err, &cli))?;
    if let Some(path) = &cli.output {
        info!(path = %path.display(), "events written");
    }
    Ok(())
}

fn with_paths(err: DocgenError, cli: &Cli) -> DocgenError {
    match err {
        DocgenError::Read { path: None, source } => DocgenError::Read {
            path: cli.input.clone(),
            source,
        },
        DocgenError::Write { path: None, source } => DocgenError::Write {
            path: cli.output.clone(),
            source,
        },
        other => other,
    }
}
