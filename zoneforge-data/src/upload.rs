//! Upload form validation and response shaping.

use log::{debug, error};
use serde::Serialize;
use thiserror::Error;
use zoneforge_core::{Document, TransformError, ZoneSet, transform};

use crate::parse_document;

/// Largest document the upload form accepts by default (4.5 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 4_718_592;

const FIELD_CITY: &str = "city";
const METHOD_POST: &str = "POST";

/// A submitted upload form after multipart decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadForm {
    /// HTTP method of the request.
    pub method: String,
    /// Raw bytes of the restricted-zones file, if uploaded.
    pub restricted: Option<Vec<u8>>,
    /// Raw bytes of the pedestrian-zones file, if uploaded.
    pub pedestrian: Option<Vec<u8>>,
    /// Every value submitted for the `city` field.
    pub city: Vec<String>,
}

impl UploadForm {
    /// Builds a `POST` form carrying both documents and a single city.
    #[must_use]
    pub fn post(restricted: Vec<u8>, pedestrian: Vec<u8>, city: impl Into<String>) -> Self {
        Self {
            method: METHOD_POST.to_owned(),
            restricted: Some(restricted),
            pedestrian: Some(pedestrian),
            city: vec![city.into()],
        }
    }

    /// First submitted city; an empty value counts as absent.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city
            .first()
            .map(String::as_str)
            .filter(|city| !city.is_empty())
    }

    fn document(&self, document: Document) -> Option<&[u8]> {
        match document {
            Document::Restricted => self.restricted.as_deref(),
            Document::Pedestrian => self.pedestrian.as_deref(),
        }
    }
}

/// Limits applied before any document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Largest accepted size of a single document in bytes.
    pub max_document_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// Errors raised while handling an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request used a method other than `POST`.
    #[error("only POST requests are allowed, got {method}")]
    MethodNotAllowed {
        /// Method the request used.
        method: String,
    },
    /// A file or the city designation was not submitted.
    #[error("missing {field}: upload both zone files and name a city")]
    MissingInput {
        /// Form field that was absent.
        field: &'static str,
    },
    /// A document exceeds [`UploadLimits::max_document_bytes`].
    #[error("{} is {size} bytes, the limit is {limit} bytes", .document.upload_name())]
    PayloadTooLarge {
        /// Offending document.
        document: Document,
        /// Submitted size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
    /// A document is not syntactically valid JSON.
    #[error("{} is not valid JSON: {source}", .document.upload_name())]
    MalformedJson {
        /// Offending document.
        document: Document,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// The transform rejected the documents.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl UploadError {
    /// Response status this error maps to.
    #[must_use]
    pub const fn status(&self) -> UploadStatus {
        match self {
            Self::MethodNotAllowed { .. } => UploadStatus::MethodNotAllowed,
            Self::MissingInput { .. } | Self::MalformedJson { .. } => UploadStatus::BadRequest,
            Self::PayloadTooLarge { .. } => UploadStatus::PayloadTooLarge,
            Self::Transform(err) if err.is_malformed_input() => UploadStatus::BadRequest,
            Self::Transform(_) => UploadStatus::InternalServerError,
        }
    }
}

/// Response status of an upload, mirroring the HTTP codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    /// 200: both sequences were produced.
    Ok,
    /// 400: the caller sent missing or malformed input.
    BadRequest,
    /// 405: the request did not use `POST`.
    MethodNotAllowed,
    /// 413: a document is larger than the configured limit.
    PayloadTooLarge,
    /// 500: the transform failed on an individual feature.
    InternalServerError,
}

impl UploadStatus {
    /// Numeric HTTP status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::MethodNotAllowed => 405,
            Self::PayloadTooLarge => 413,
            Self::InternalServerError => 500,
        }
    }

    /// Returns true for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::BadRequest | Self::MethodNotAllowed | Self::PayloadTooLarge
        )
    }
}

/// Successful response body: a summary plus both sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutcome {
    /// Counts of the emitted records, e.g. `Processed 1 restricted-zones, ...`.
    pub message: String,
    /// Transformed records, serialised as `restrictedZones` and `pedestrianZones`.
    #[serde(flatten)]
    pub zones: ZoneSet,
}

impl From<ZoneSet> for TransformOutcome {
    fn from(zones: ZoneSet) -> Self {
        Self {
            message: zones.summary(),
            zones,
        }
    }
}

/// Body of an upload response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Transform output.
    Success(TransformOutcome),
    /// Human-readable failure.
    Failure {
        /// Error message.
        error: String,
    },
}

/// Status and body returned to the upload's sender.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    /// Response status.
    pub status: UploadStatus,
    /// JSON body.
    pub body: ResponseBody,
}

impl UploadResponse {
    fn success(zones: ZoneSet) -> Self {
        Self {
            status: UploadStatus::Ok,
            body: ResponseBody::Success(zones.into()),
        }
    }

    fn failure(err: &UploadError) -> Self {
        let status = err.status();
        let error = if status.is_client_error() {
            err.to_string()
        } else {
            format!("server error: {err}")
        };
        Self {
            status,
            body: ResponseBody::Failure { error },
        }
    }
}

/// Validates the form, parses both documents and runs the transform.
///
/// Checks run in a fixed order: method, presence of both files and the city,
/// document sizes, JSON syntax (restricted first), then the transform.
///
/// # Errors
/// The first [`UploadError`] raised by those checks.
pub fn process_upload(form: &UploadForm, limits: &UploadLimits) -> Result<ZoneSet, UploadError> {
    if form.method != METHOD_POST {
        return Err(UploadError::MethodNotAllowed {
            method: form.method.clone(),
        });
    }
    let restricted_raw = required_document(form, Document::Restricted)?;
    let pedestrian_raw = required_document(form, Document::Pedestrian)?;
    let city = form
        .city()
        .ok_or(UploadError::MissingInput { field: FIELD_CITY })?;

    for (document, raw) in [
        (Document::Restricted, restricted_raw),
        (Document::Pedestrian, pedestrian_raw),
    ] {
        check_size(document, raw, limits)?;
    }

    let restricted = parse_document(restricted_raw, Document::Restricted)?;
    let pedestrian = parse_document(pedestrian_raw, Document::Pedestrian)?;
    debug!(
        "parsed {} and {} bytes of zone documents for {city}",
        restricted_raw.len(),
        pedestrian_raw.len()
    );
    transform(&restricted, &pedestrian, city).map_err(UploadError::from)
}

/// Runs [`process_upload`] and shapes the outcome into a response.
///
/// # Examples
/// ```
/// use zoneforge_data::{UploadForm, UploadLimits, UploadStatus, handle_upload};
///
/// let mut form = UploadForm::post(b"{}".to_vec(), b"{}".to_vec(), "Mettmann");
/// form.method = "GET".to_owned();
/// let response = handle_upload(&form, &UploadLimits::default());
/// assert_eq!(response.status, UploadStatus::MethodNotAllowed);
/// assert_eq!(response.status.code(), 405);
/// ```
#[must_use]
pub fn handle_upload(form: &UploadForm, limits: &UploadLimits) -> UploadResponse {
    match process_upload(form, limits) {
        Ok(zones) => UploadResponse::success(zones),
        Err(err) => {
            if !err.status().is_client_error() {
                error!("zone upload failed: {err}");
            }
            UploadResponse::failure(&err)
        }
    }
}

fn required_document(form: &UploadForm, document: Document) -> Result<&[u8], UploadError> {
    form.document(document).ok_or(UploadError::MissingInput {
        field: document.field(),
    })
}

fn check_size(document: Document, raw: &[u8], limits: &UploadLimits) -> Result<(), UploadError> {
    let size = u64::try_from(raw.len()).unwrap_or(u64::MAX);
    if size > limits.max_document_bytes {
        return Err(UploadError::PayloadTooLarge {
            document,
            size,
            limit: limits.max_document_bytes,
        });
    }
    Ok(())
}
