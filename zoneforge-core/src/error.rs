//! Error types raised while transforming zone collections.

use std::fmt;

use thiserror::Error;

use crate::Document;

/// Why a document was rejected before any feature was mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The document has no `features` member.
    MissingFeatures,
    /// `features` exists but is not a sequence.
    FeaturesNotSequence,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFeatures => f.write_str("`features` is missing"),
            Self::FeaturesNotSequence => f.write_str("`features` is not a sequence"),
        }
    }
}

/// Errors returned by [`crate::transform`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The document parsed as JSON but is not a feature collection.
    #[error("{document} document is malformed: {reason}")]
    MalformedInput {
        /// Offending document.
        document: Document,
        /// Structural problem found.
        reason: MalformedReason,
    },
    /// A feature carries no `geometry.coordinates` at all.
    #[error("feature {index} in {document} has no geometry coordinates")]
    MissingCoordinates {
        /// Document holding the feature.
        document: Document,
        /// Zero-based position of the feature.
        index: usize,
    },
    /// A restricted feature's coordinates cannot be read as a position.
    #[error("feature {index} in {document} has coordinates that are not a sequence")]
    InvalidCoordinates {
        /// Document holding the feature.
        document: Document,
        /// Zero-based position of the feature.
        index: usize,
    },
}

impl TransformError {
    /// Returns true when the caller supplied a structurally wrong document.
    ///
    /// Per-feature faults are not attributed to the caller and report `false`.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Document the error refers to.
    #[must_use]
    pub const fn document(&self) -> Document {
        match self {
            Self::MalformedInput { document, .. }
            | Self::MissingCoordinates { document, .. }
            | Self::InvalidCoordinates { document, .. } => *document,
        }
    }
}
