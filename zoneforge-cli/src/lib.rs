//! Command-line interface for transforming zone exports offline.
//!
//! The `transform` subcommand reads the two raw documents from disk, runs them
//! through the same validation as an upload, and writes the downloadable
//! artefacts. Values are layered from CLI flags, configuration files and
//! `ZONEFORGE_CMDS_TRANSFORM_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;
use zoneforge_core::Document;

mod error;
mod transform;

pub use error::CliError;
use transform::TransformArgs;
#[cfg(test)]
use transform::{TransformConfig, run_transform_with};

// Flags share their names with the upload form fields.
const ARG_RESTRICTED_ZONES: &str = Document::Restricted.field();
const ARG_PEDESTRIAN_ZONES: &str = Document::Pedestrian.field();
const ARG_CITY: &str = "city";
const ARG_OUTPUT_DIR: &str = "output-dir";
const ARG_MAX_DOCUMENT_BYTES: &str = "max-document-bytes";
const ENV_RESTRICTED_ZONES: &str = "ZONEFORGE_CMDS_TRANSFORM_RESTRICTED_ZONES";
const ENV_PEDESTRIAN_ZONES: &str = "ZONEFORGE_CMDS_TRANSFORM_PEDESTRIAN_ZONES";
const ENV_CITY: &str = "ZONEFORGE_CMDS_TRANSFORM_CITY";

/// Run the zoneforge CLI with the current process arguments and environment.
///
/// # Errors
/// [`CliError`] when parsing, configuration, validation, the transform or
/// writing the artefacts fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Transform(args) => transform::run_transform(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "zoneforge",
    about = "Turn OpenStreetMap zone exports into restricted and pedestrian zone records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transform raw zone exports into downloadable zone files.
    Transform(TransformArgs),
}

#[cfg(test)]
mod tests;
