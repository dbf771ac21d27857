use std::fmt;

/// Identifies which of the two input collections a value came from.
///
/// # Examples
/// ```
/// use zoneforge_core::Document;
///
/// assert_eq!(Document::Restricted.field(), "restricted-zones");
/// assert_eq!(Document::Pedestrian.artefact_name(), "pedestrian-zones.json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// Point features describing fixed-radius restricted zones.
    Restricted,
    /// Polygon features describing pedestrian zones.
    Pedestrian,
}

impl Document {
    /// Upload form field carrying this document.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Restricted => "restricted-zones",
            Self::Pedestrian => "pedestrian-zones",
        }
    }

    /// Conventional file name of the raw upload.
    #[must_use]
    pub const fn upload_name(self) -> &'static str {
        match self {
            Self::Restricted => "restricted-zones-raw.geojson",
            Self::Pedestrian => "pedestrian-zones-raw.geojson",
        }
    }

    /// File name of the transformed download.
    #[must_use]
    pub const fn artefact_name(self) -> &'static str {
        match self {
            Self::Restricted => "restricted-zones.json",
            Self::Pedestrian => "pedestrian-zones.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}
