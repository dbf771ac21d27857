//! Facade crate for the zoneforge zone transformer.
//!
//! This crate re-exports the transform entry point, the output records and
//! the upload boundary so hosts can depend on a single package.

#![forbid(unsafe_code)]

pub use zoneforge_core::{
    Document, PedestrianZone, RestrictedZone, TransformError, ZoneSet, transform,
};

pub use zoneforge_data::{
    ArtefactError, ArtefactPaths, ResponseBody, TransformOutcome, UploadError, UploadForm,
    UploadLimits, UploadResponse, UploadStatus, handle_upload, process_upload, write_artefacts,
};
