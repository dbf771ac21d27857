use serde_json::Value;
use zoneforge_core::Document;

use crate::UploadError;

/// Parses one uploaded document as JSON.
///
/// # Errors
/// [`UploadError::MalformedJson`] naming the document and carrying the
/// parser's message.
///
/// # Examples
/// ```
/// use zoneforge_core::Document;
/// use zoneforge_data::parse_document;
///
/// let err = parse_document(b"not json", Document::Pedestrian).unwrap_err();
/// assert!(err.to_string().starts_with("pedestrian-zones-raw.geojson is not valid JSON: "));
/// ```
pub fn parse_document(bytes: &[u8], document: Document) -> Result<Value, UploadError> {
    serde_json::from_slice(bytes).map_err(|source| UploadError::MalformedJson { document, source })
}
