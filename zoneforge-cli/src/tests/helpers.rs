//! Test helpers for laying out zone exports on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const RESTRICTED_EXPORT: &[u8] = br#"{"type":"FeatureCollection","features":[
  {"type":"Feature","geometry":{"type":"Point","coordinates":[6.9712,51.2507]},
   "properties":{"amenity":"bank","name":"Sparkasse"}},
  {"type":"Feature","geometry":{"type":"Point","coordinates":[6.9731,51.2499]},
   "properties":{"leisure":"playground"}}
]}"#;

pub(super) const PEDESTRIAN_EXPORT: &[u8] = br#"{"type":"FeatureCollection","features":[
  {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[6.97,51.25],[6.98,51.25],[6.98,51.26],[6.97,51.25]]]},
   "properties":{"highway":"pedestrian"}},
  {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[6.97,51.25],[6.98,51.25]]]},
   "properties":{"highway":"pedestrian"}}
]}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Raw exports written into a temporary workspace.
#[derive(Debug)]
pub(super) struct ZoneExports {
    _dir: TempDir,
    root: Utf8PathBuf,
    restricted: Utf8PathBuf,
    pedestrian: Utf8PathBuf,
}

impl ZoneExports {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let restricted = root.join("restricted-zones-raw.geojson");
        let pedestrian = root.join("pedestrian-zones-raw.geojson");
        write_utf8(&restricted, RESTRICTED_EXPORT);
        write_utf8(&pedestrian, PEDESTRIAN_EXPORT);
        Self {
            _dir: dir,
            root,
            restricted,
            pedestrian,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn restricted(&self) -> &Utf8Path {
        &self.restricted
    }

    pub(super) fn pedestrian(&self) -> &Utf8Path {
        &self.pedestrian
    }

    pub(super) fn output_dir(&self) -> Utf8PathBuf {
        self.root.join("out")
    }
}
