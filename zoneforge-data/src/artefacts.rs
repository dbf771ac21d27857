//! Writes transformed zones as downloadable JSON files.

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use serde::Serialize;
use thiserror::Error;
use zoneforge_core::{Document, ZoneSet};

/// Locations of the two written artefacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactPaths {
    /// Path of `restricted-zones.json`.
    pub restricted: Utf8PathBuf,
    /// Path of `pedestrian-zones.json`.
    pub pedestrian: Utf8PathBuf,
}

/// Errors raised while writing artefacts.
#[derive(Debug, Error)]
pub enum ArtefactError {
    /// The output directory could not be created or opened.
    #[error("failed to prepare output directory {path}: {source}")]
    PrepareDirectory {
        /// Requested directory.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising a record sequence failed.
    #[error("failed to serialise {document} records: {source}")]
    Serialise {
        /// Sequence being written.
        document: Document,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing an artefact failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Writes both sequences into `dir`, creating it when needed.
///
/// Files are pretty-printed with two-space indentation and replaced if they
/// already exist.
///
/// # Errors
/// [`ArtefactError`] when the directory cannot be prepared or a file cannot
/// be serialised or written.
pub fn write_artefacts(dir: &Utf8Path, zones: &ZoneSet) -> Result<ArtefactPaths, ArtefactError> {
    let handle =
        zoneforge_fs::ensure_dir(dir).map_err(|source| ArtefactError::PrepareDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
    let restricted = write_records(&handle, dir, Document::Restricted, &zones.restricted_zones)?;
    let pedestrian = write_records(&handle, dir, Document::Pedestrian, &zones.pedestrian_zones)?;
    Ok(ArtefactPaths {
        restricted,
        pedestrian,
    })
}

fn write_records<T: Serialize>(
    handle: &zoneforge_fs::Dir,
    dir: &Utf8Path,
    document: Document,
    records: &[T],
) -> Result<Utf8PathBuf, ArtefactError> {
    let mut payload = serde_json::to_vec_pretty(records)
        .map_err(|source| ArtefactError::Serialise { document, source })?;
    payload.push(b'\n');

    let path = dir.join(document.artefact_name());
    zoneforge_fs::write_file(handle, document.artefact_name(), &payload).map_err(|source| {
        ArtefactError::Write {
            path: path.clone(),
            source,
        }
    })?;
    info!("wrote {} {document} records to {path}", records.len());
    Ok(path)
}
