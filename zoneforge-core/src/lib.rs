//! Core zone model for the zoneforge transformer.
//!
//! Responsibilities:
//! - Read restricted-zone and pedestrian-zone feature collections leniently.
//! - Map each feature onto the fixed output records.
//! - Drop pedestrian polygons whose outer ring is degenerate.
//!
//! Boundaries:
//! - No I/O. Callers hand in parsed JSON documents and receive owned records.
//! - JSON syntax errors belong to the caller; this crate only sees values.
//!
//! Invariants:
//! - Every restricted feature yields exactly one record, in input order.
//! - Retained pedestrian records keep their input order and geometry.

#![forbid(unsafe_code)]

mod document;
mod error;
pub mod feature;
pub mod transform;
pub mod zone;

pub use document::Document;
pub use error::{MalformedReason, TransformError};
pub use feature::{Properties, RawFeature, RawFeatureCollection, RawGeometry};
pub use transform::{ZoneSet, first_present, map_pedestrian, map_restricted, transform};
pub use zone::{
    MIN_OUTER_RING_POSITIONS, PEDESTRIAN_ZONE_TYPE, PedestrianZone, PointGeometry,
    PolygonGeometry, Position, RESTRICTED_ZONE_RADIUS, RestrictedZone, UNKNOWN_ZONE_NAME,
    UNKNOWN_ZONE_TYPE,
};
