//! Transform command implementation for the zoneforge CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use zoneforge_data::{
    DEFAULT_MAX_DOCUMENT_BYTES, UploadForm, UploadLimits, process_upload, write_artefacts,
};

use crate::{
    ARG_CITY, ARG_MAX_DOCUMENT_BYTES, ARG_OUTPUT_DIR, ARG_PEDESTRIAN_ZONES, ARG_RESTRICTED_ZONES,
    CliError, ENV_CITY, ENV_PEDESTRIAN_ZONES, ENV_RESTRICTED_ZONES,
};

/// CLI arguments for the `transform` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read the restricted-zones and pedestrian-zones GeoJSON exports, \
                 tag every record with the city, and write restricted-zones.json \
                 and pedestrian-zones.json. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Transform raw zone exports into zone files"
)]
#[ortho_config(prefix = "ZONEFORGE")]
pub(crate) struct TransformArgs {
    /// Path to the raw restricted-zones GeoJSON export.
    #[arg(long = ARG_RESTRICTED_ZONES, value_name = "path")]
    #[serde(default)]
    pub(crate) restricted_zones: Option<Utf8PathBuf>,
    /// Path to the raw pedestrian-zones GeoJSON export.
    #[arg(long = ARG_PEDESTRIAN_ZONES, value_name = "path")]
    #[serde(default)]
    pub(crate) pedestrian_zones: Option<Utf8PathBuf>,
    /// City recorded on every output record.
    #[arg(long = ARG_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Directory receiving the artefacts (defaults to the working directory).
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// Largest accepted size of each input document in bytes.
    #[arg(long = ARG_MAX_DOCUMENT_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) max_document_bytes: Option<u64>,
}

impl TransformArgs {
    pub(crate) fn into_config(self) -> Result<TransformConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TransformConfig::try_from(merged)
    }
}

/// Resolved `transform` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransformConfig {
    pub(crate) restricted_zones: Utf8PathBuf,
    pub(crate) pedestrian_zones: Utf8PathBuf,
    pub(crate) city: String,
    pub(crate) output_dir: Utf8PathBuf,
    pub(crate) limits: UploadLimits,
}

impl TransformConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.restricted_zones, ARG_RESTRICTED_ZONES)?;
        Self::require_existing(&self.pedestrian_zones, ARG_PEDESTRIAN_ZONES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        let is_file = zoneforge_fs::file_is_file(path)
            .map_err(|source| source_error(field, path, source, SourceAccess::Inspect))?;
        if is_file {
            Ok(())
        } else {
            Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SourceAccess {
    Inspect,
    Read,
}

/// A vanished source reads as missing whether it was being inspected or read.
fn source_error(
    field: &'static str,
    path: &Utf8Path,
    source: std::io::Error,
    access: SourceAccess,
) -> CliError {
    let path = path.to_path_buf();
    match (source.kind(), access) {
        (std::io::ErrorKind::NotFound, _) => CliError::MissingSourceFile { field, path },
        (_, SourceAccess::Inspect) => CliError::InspectSourcePath {
            field,
            path,
            source,
        },
        (_, SourceAccess::Read) => CliError::ReadSource {
            field,
            path,
            source,
        },
    }
}

impl TryFrom<TransformArgs> for TransformConfig {
    type Error = CliError;

    fn try_from(args: TransformArgs) -> Result<Self, Self::Error> {
        let restricted_zones = args.restricted_zones.ok_or(CliError::MissingArgument {
            field: ARG_RESTRICTED_ZONES,
            env: ENV_RESTRICTED_ZONES,
        })?;
        let pedestrian_zones = args.pedestrian_zones.ok_or(CliError::MissingArgument {
            field: ARG_PEDESTRIAN_ZONES,
            env: ENV_PEDESTRIAN_ZONES,
        })?;
        let city = args
            .city
            .filter(|city| !city.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_CITY,
                env: ENV_CITY,
            })?;
        let output_dir = args.output_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let limits = UploadLimits {
            max_document_bytes: args.max_document_bytes.unwrap_or(DEFAULT_MAX_DOCUMENT_BYTES),
        };

        Ok(Self {
            restricted_zones,
            pedestrian_zones,
            city,
            output_dir,
            limits,
        })
    }
}

pub(crate) fn run_transform(args: TransformArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_transform_config(args)?;
    run_transform_with(&config, writer)
}

fn resolve_transform_config(args: TransformArgs) -> Result<TransformConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Transforms the configured documents, writes the artefacts and prints the
/// summary line to `writer`.
pub(crate) fn run_transform_with(
    config: &TransformConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let restricted = read_source(&config.restricted_zones, ARG_RESTRICTED_ZONES)?;
    let pedestrian = read_source(&config.pedestrian_zones, ARG_PEDESTRIAN_ZONES)?;
    let form = UploadForm::post(restricted, pedestrian, config.city.as_str());

    let zones = process_upload(&form, &config.limits)?;
    let paths = write_artefacts(&config.output_dir, &zones)?;
    info!(
        "transformed zones for {} into {} and {}",
        config.city, paths.restricted, paths.pedestrian
    );

    writeln!(writer, "{}", zones.summary()).map_err(CliError::WriteOutput)
}

fn read_source(path: &Utf8Path, field: &'static str) -> Result<Vec<u8>, CliError> {
    zoneforge_fs::read_file(path)
        .map_err(|source| source_error(field, path, source, SourceAccess::Read))
}
