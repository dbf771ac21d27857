//! Lenient view over GeoJSON-like feature collections.
//!
//! Uploaded collections come from many tools and rarely agree on which members
//! they fill in. Every nested member is therefore optional: an absent, null or
//! non-object `geometry` or `properties` reads as `None`, and the mapping code
//! substitutes the documented defaults explicitly.

use serde_json::{Map, Value};

use crate::{Document, MalformedReason, TransformError};

/// A parsed `{ "features": [...] }` document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFeatureCollection {
    /// Features in document order.
    pub features: Vec<RawFeature>,
}

impl RawFeatureCollection {
    /// Reads the `features` sequence out of a parsed document.
    ///
    /// # Errors
    /// Returns [`TransformError::MalformedInput`] when `features` is missing or
    /// is not a sequence.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use zoneforge_core::{Document, RawFeatureCollection};
    ///
    /// let doc = json!({ "features": [{ "properties": { "name": "Markt" } }] });
    /// let collection = RawFeatureCollection::from_document(&doc, Document::Restricted)?;
    /// assert_eq!(collection.features.len(), 1);
    /// # Ok::<(), zoneforge_core::TransformError>(())
    /// ```
    pub fn from_document(document: &Value, kind: Document) -> Result<Self, TransformError> {
        let features = match document.get("features") {
            Some(Value::Array(features)) => features,
            Some(_) => {
                return Err(TransformError::MalformedInput {
                    document: kind,
                    reason: MalformedReason::FeaturesNotSequence,
                });
            }
            None => {
                return Err(TransformError::MalformedInput {
                    document: kind,
                    reason: MalformedReason::MissingFeatures,
                });
            }
        };
        Ok(Self {
            features: features.iter().map(RawFeature::from_value).collect(),
        })
    }
}

/// One feature with every member optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFeature {
    /// Geometry member, if it was an object.
    pub geometry: Option<RawGeometry>,
    /// Properties member, if it was an object.
    pub properties: Option<Properties>,
}

static EMPTY_PROPERTIES: Properties = Properties {
    amenity: None,
    leisure: None,
    name: None,
};

impl RawFeature {
    /// Builds a feature from any JSON value; non-objects read as empty.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            geometry: value.get("geometry").and_then(RawGeometry::from_value),
            properties: value.get("properties").and_then(Properties::from_value),
        }
    }

    /// Raw `geometry.coordinates`, if present and not null.
    #[must_use]
    pub fn coordinates(&self) -> Option<&Value> {
        self.geometry.as_ref()?.coordinates.as_ref()
    }

    /// Properties with absent members resolved to the empty set.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        self.properties.as_ref().unwrap_or(&EMPTY_PROPERTIES)
    }
}

/// The `geometry` member of a feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawGeometry {
    /// Coordinates exactly as uploaded. JSON `null` reads as absent.
    pub coordinates: Option<Value>,
}

impl RawGeometry {
    fn from_value(value: &Value) -> Option<Self> {
        let geometry = value.as_object()?;
        Some(Self {
            coordinates: geometry
                .get("coordinates")
                .filter(|coordinates| !coordinates.is_null())
                .cloned(),
        })
    }
}

/// The property members the transformer reads.
///
/// A member counts as present when it is a non-empty string, `true`, or a
/// non-zero number; numbers and booleans are kept in their textual form.
/// Arrays and objects count as absent even though they are truthy, so the
/// resolved `type` and `name` of a zone are always strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    /// OSM `amenity` tag.
    pub amenity: Option<String>,
    /// OSM `leisure` tag.
    pub leisure: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

impl Properties {
    fn from_value(value: &Value) -> Option<Self> {
        let properties = value.as_object()?;
        Some(Self {
            amenity: present_text(properties, "amenity"),
            leisure: present_text(properties, "leisure"),
            name: present_text(properties, "name"),
        })
    }
}

fn present_text(properties: &Map<String, Value>, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Bool(true) => Some(true.to_string()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({}), MalformedReason::MissingFeatures)]
    #[case(json!([]), MalformedReason::MissingFeatures)]
    #[case(json!({ "features": {} }), MalformedReason::FeaturesNotSequence)]
    #[case(json!({ "features": null }), MalformedReason::FeaturesNotSequence)]
    fn rejects_documents_without_a_feature_sequence(
        #[case] document: Value,
        #[case] expected: MalformedReason,
    ) {
        let err = RawFeatureCollection::from_document(&document, Document::Pedestrian)
            .expect_err("document should be rejected");
        assert_eq!(
            err,
            TransformError::MalformedInput {
                document: Document::Pedestrian,
                reason: expected,
            }
        );
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("feature"))]
    #[case(json!({ "geometry": 4, "properties": [] }))]
    #[case(json!({ "geometry": null, "properties": null }))]
    fn odd_features_read_as_empty(#[case] value: Value) {
        let feature = RawFeature::from_value(&value);
        assert_eq!(feature, RawFeature::default());
        assert_eq!(feature.properties(), &Properties::default());
        assert!(feature.coordinates().is_none());
    }

    #[rstest]
    fn null_coordinates_read_as_absent() {
        let feature = RawFeature::from_value(&json!({ "geometry": { "coordinates": null } }));
        assert!(feature.geometry.is_some());
        assert!(feature.coordinates().is_none());
    }

    #[rstest]
    #[case(json!("bank"), Some("bank"))]
    #[case(json!(""), None)]
    #[case(json!(null), None)]
    #[case(json!(false), None)]
    #[case(json!(true), Some("true"))]
    #[case(json!(0), None)]
    #[case(json!(7), Some("7"))]
    #[case(json!(["bank"]), None)]
    #[case(json!({ "kind": "bank" }), None)]
    fn property_presence_follows_truthiness(#[case] value: Value, #[case] expected: Option<&str>) {
        let feature = RawFeature::from_value(&json!({ "properties": { "amenity": value } }));
        assert_eq!(feature.properties().amenity.as_deref(), expected);
    }
}
