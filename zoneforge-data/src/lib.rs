//! Upload boundary and artefact output for the zoneforge transformer.
//!
//! Responsibilities:
//! - Validate an upload form and parse its two documents.
//! - Translate transform outcomes into response statuses and bodies.
//! - Write the transformed sequences as downloadable JSON files.
//!
//! Boundaries:
//! - Mapping rules live in `zoneforge-core`; this crate only feeds it.
//! - No HTTP server. Hosts adapt [`UploadForm`] and [`UploadResponse`].

#![forbid(unsafe_code)]

mod artefacts;
mod document;
mod upload;

pub use artefacts::{ArtefactError, ArtefactPaths, write_artefacts};
pub use document::parse_document;
pub use upload::{
    DEFAULT_MAX_DOCUMENT_BYTES, ResponseBody, TransformOutcome, UploadError, UploadForm,
    UploadLimits, UploadResponse, UploadStatus, handle_upload, process_upload,
};
