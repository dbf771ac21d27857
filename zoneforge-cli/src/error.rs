//! Error types emitted by the zoneforge CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use zoneforge_data::{ArtefactError, UploadError};

/// Errors emitted by the zoneforge CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can provide it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {field} path {path:?}: {source}")]
    ReadSource {
        /// Flag naming the input.
        field: &'static str,
        /// Path being read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The documents were rejected by upload validation or the transform.
    #[error(transparent)]
    Upload(#[from] UploadError),
    /// Writing the zone artefacts failed.
    #[error(transparent)]
    Artefacts(#[from] ArtefactError),
    /// Writing the summary line failed.
    #[error("failed to write summary: {0}")]
    WriteOutput(#[source] std::io::Error),
}
