//! Output records handed back to the upload boundary.

use serde::Serialize;
use serde_json::Value;

use crate::transform::first_present;
use crate::{Document, RawFeature, TransformError};

/// Radius of every restricted zone, in the input's distance unit.
pub const RESTRICTED_ZONE_RADIUS: u32 = 100;
/// Zone type used when neither `amenity` nor `leisure` is present.
pub const UNKNOWN_ZONE_TYPE: &str = "unknown";
/// Placeholder name ("unknown") used when a feature has no `name`.
pub const UNKNOWN_ZONE_NAME: &str = "Unbekannt";
/// Zone type of every pedestrian record.
pub const PEDESTRIAN_ZONE_TYPE: &str = "pedestrian";
/// Smallest outer ring that still bounds an area.
pub const MIN_OUTER_RING_POSITIONS: usize = 3;

/// A `[lng, lat]` pair carried through without validation.
pub type Position = [Value; 2];

/// GeoJSON `Point` geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    /// Longitude then latitude.
    pub coordinates: Position,
}

/// GeoJSON `Polygon` geometry; the rings are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct PolygonGeometry {
    /// Rings as uploaded, outer ring first.
    pub coordinates: Value,
}

/// A point of interest with a fixed exclusion radius.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use zoneforge_core::{RawFeature, RestrictedZone};
///
/// let feature = RawFeature::from_value(&json!({
///     "geometry": { "coordinates": [6.77, 51.25] },
///     "properties": { "leisure": "park" }
/// }));
/// let zone = RestrictedZone::from_feature(&feature, "Mettmann", 0)?;
/// assert_eq!(zone.zone_type, "park");
/// assert_eq!(zone.name, "Unbekannt");
/// # Ok::<(), zoneforge_core::TransformError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestrictedZone {
    /// City the zone belongs to.
    pub city: String,
    /// `amenity`, else `leisure`, else [`UNKNOWN_ZONE_TYPE`].
    #[serde(rename = "type")]
    pub zone_type: String,
    /// `name`, else [`UNKNOWN_ZONE_NAME`].
    pub name: String,
    /// Centre of the zone.
    pub location: PointGeometry,
    /// Always [`RESTRICTED_ZONE_RADIUS`].
    pub radius: u32,
}

impl RestrictedZone {
    /// Maps one restricted feature.
    ///
    /// The first two coordinate entries become `[lng, lat]`; a short sequence
    /// fills the gap with `null` and extra entries are ignored.
    ///
    /// # Errors
    /// [`TransformError::MissingCoordinates`] when the feature has no
    /// coordinates and [`TransformError::InvalidCoordinates`] when they are not
    /// a sequence.
    pub fn from_feature(
        feature: &RawFeature,
        city: &str,
        index: usize,
    ) -> Result<Self, TransformError> {
        let document = Document::Restricted;
        let coordinates = feature
            .coordinates()
            .ok_or(TransformError::MissingCoordinates { document, index })?;
        let Value::Array(pair) = coordinates else {
            return Err(TransformError::InvalidCoordinates { document, index });
        };
        let lng = pair.first().cloned().unwrap_or(Value::Null);
        let lat = pair.get(1).cloned().unwrap_or(Value::Null);

        let properties = feature.properties();
        let zone_type = first_present([properties.amenity.as_deref(), properties.leisure.as_deref()])
            .unwrap_or(UNKNOWN_ZONE_TYPE);
        let name = first_present([properties.name.as_deref()]).unwrap_or(UNKNOWN_ZONE_NAME);

        Ok(Self {
            city: city.to_owned(),
            zone_type: zone_type.to_owned(),
            name: name.to_owned(),
            location: PointGeometry {
                coordinates: [lng, lat],
            },
            radius: RESTRICTED_ZONE_RADIUS,
        })
    }
}

/// A polygon-bounded pedestrian area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PedestrianZone {
    /// City the zone belongs to.
    pub city: String,
    /// Always [`PEDESTRIAN_ZONE_TYPE`].
    #[serde(rename = "type")]
    pub zone_type: String,
    /// Boundary of the zone.
    pub geometry: PolygonGeometry,
}

impl PedestrianZone {
    /// Maps one pedestrian feature into a candidate record.
    ///
    /// Candidates are not yet checked for a usable outer ring; see
    /// [`Self::outer_ring_len`].
    ///
    /// # Errors
    /// [`TransformError::MissingCoordinates`] when the feature has no
    /// coordinates.
    pub fn from_feature(
        feature: &RawFeature,
        city: &str,
        index: usize,
    ) -> Result<Self, TransformError> {
        let coordinates =
            feature
                .coordinates()
                .ok_or(TransformError::MissingCoordinates {
                    document: Document::Pedestrian,
                    index,
                })?;
        Ok(Self {
            city: city.to_owned(),
            zone_type: PEDESTRIAN_ZONE_TYPE.to_owned(),
            geometry: PolygonGeometry {
                coordinates: coordinates.clone(),
            },
        })
    }

    /// Number of positions in the outer ring.
    ///
    /// `None` when the coordinates have no ring sequence to count.
    #[must_use]
    pub fn outer_ring_len(&self) -> Option<usize> {
        let rings = self.geometry.coordinates.as_array()?;
        rings.first()?.as_array().map(Vec::len)
    }

    /// Returns true when the outer ring has at least
    /// [`MIN_OUTER_RING_POSITIONS`] positions.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.outer_ring_len()
            .is_some_and(|len| len >= MIN_OUTER_RING_POSITIONS)
    }
}
