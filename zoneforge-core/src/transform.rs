//! The zone transform: two feature collections in, two record sequences out.

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::{
    Document, MIN_OUTER_RING_POSITIONS, PedestrianZone, RawFeatureCollection, RestrictedZone,
    TransformError,
};

/// Records produced by one transform run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSet {
    /// One record per restricted feature, in input order.
    pub restricted_zones: Vec<RestrictedZone>,
    /// Pedestrian records whose outer ring bounds an area, in input order.
    pub pedestrian_zones: Vec<PedestrianZone>,
}

impl ZoneSet {
    /// Human-readable counts of the emitted records.
    ///
    /// # Examples
    /// ```
    /// use zoneforge_core::ZoneSet;
    ///
    /// assert_eq!(
    ///     ZoneSet::default().summary(),
    ///     "Processed 0 restricted-zones, 0 pedestrian-zones"
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Processed {} {}, {} {}",
            self.restricted_zones.len(),
            Document::Restricted,
            self.pedestrian_zones.len(),
            Document::Pedestrian,
        )
    }
}

/// Transforms both uploaded collections for `city`.
///
/// Both documents are checked for a `features` sequence before any feature is
/// mapped, the restricted document first.
///
/// # Errors
/// [`TransformError::MalformedInput`] when either document lacks a feature
/// sequence, otherwise the first per-feature error encountered.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use zoneforge_core::transform;
///
/// let restricted = json!({ "features": [
///     { "geometry": { "coordinates": [6.77, 51.25] },
///       "properties": { "amenity": "bank", "name": "Sparkasse" } }
/// ]});
/// let pedestrian = json!({ "features": [
///     { "geometry": { "coordinates": [[[0, 0], [1, 1]]] } }
/// ]});
/// let zones = transform(&restricted, &pedestrian, "Mettmann")?;
/// assert_eq!(zones.restricted_zones.len(), 1);
/// assert!(zones.pedestrian_zones.is_empty());
/// # Ok::<(), zoneforge_core::TransformError>(())
/// ```
pub fn transform(
    restricted: &Value,
    pedestrian: &Value,
    city: &str,
) -> Result<ZoneSet, TransformError> {
    let restricted_raw = RawFeatureCollection::from_document(restricted, Document::Restricted)?;
    let pedestrian_raw = RawFeatureCollection::from_document(pedestrian, Document::Pedestrian)?;

    let zones = ZoneSet {
        restricted_zones: map_restricted(&restricted_raw, city)?,
        pedestrian_zones: map_pedestrian(&pedestrian_raw, city)?,
    };
    debug!(
        "transformed {} of {} restricted and {} of {} pedestrian features for {city}",
        zones.restricted_zones.len(),
        restricted_raw.features.len(),
        zones.pedestrian_zones.len(),
        pedestrian_raw.features.len(),
    );
    Ok(zones)
}

/// Maps every restricted feature; nothing is filtered.
///
/// # Errors
/// The first error from [`RestrictedZone::from_feature`].
pub fn map_restricted(
    collection: &RawFeatureCollection,
    city: &str,
) -> Result<Vec<RestrictedZone>, TransformError> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| RestrictedZone::from_feature(feature, city, index))
        .collect()
}

/// Maps pedestrian features and drops those without a usable outer ring.
///
/// Dropped candidates are logged, never reported as errors.
///
/// # Errors
/// The first error from [`PedestrianZone::from_feature`].
pub fn map_pedestrian(
    collection: &RawFeatureCollection,
    city: &str,
) -> Result<Vec<PedestrianZone>, TransformError> {
    let mut retained = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.iter().enumerate() {
        let candidate = PedestrianZone::from_feature(feature, city, index)?;
        if candidate.has_area() {
            retained.push(candidate);
            continue;
        }
        match candidate.outer_ring_len() {
            Some(len) => warn!(
                "dropping pedestrian feature {index}: outer ring has {len} positions, \
                 at least {MIN_OUTER_RING_POSITIONS} required"
            ),
            None => warn!("dropping pedestrian feature {index}: coordinates have no outer ring"),
        }
    }
    Ok(retained)
}

/// Returns the first candidate that is present and non-empty.
///
/// This is an ordered selection, not a merge.
///
/// # Examples
/// ```
/// use zoneforge_core::first_present;
///
/// assert_eq!(first_present([None, Some(""), Some("park")]), Some("park"));
/// assert_eq!(first_present([None, None]), None);
/// ```
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
}
