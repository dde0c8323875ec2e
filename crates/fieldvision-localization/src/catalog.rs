//! Known marker placements on the field.

use std::collections::HashMap;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;

/// Surveyed placement of one marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerMetadata {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Field position `[x, y, z]`; only `x` and `y` take part in planar
    /// localization.
    pub position: [f64; 3],
    pub orientation: Quaternion,
}

impl MarkerMetadata {
    #[inline]
    pub fn field_position(&self) -> Point2<f64> {
        Point2::new(self.position[0], self.position[1])
    }
}

/// Lookup of marker placements by id.
pub trait MarkerCatalog {
    fn metadata(&self, id: u32) -> Option<&MarkerMetadata>;
}

impl MarkerCatalog for HashMap<u32, MarkerMetadata> {
    fn metadata(&self, id: u32) -> Option<&MarkerMetadata> {
        self.get(&id)
    }
}

/// A field's full set of markers, typically loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub tags: Vec<MarkerMetadata>,
}

impl FieldLayout {
    pub fn new(tags: Vec<MarkerMetadata>) -> Self {
        Self { tags }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl MarkerCatalog for FieldLayout {
    fn metadata(&self, id: u32) -> Option<&MarkerMetadata> {
        self.tags.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "tags": [
            { "id": 1, "name": "blue-left", "position": [60.25, 41.41, 4.0],
              "orientation": { "w": 0.3536, "x": -0.6124, "y": 0.6124, "z": -0.3536 } },
            { "id": 2, "position": [60.25, 35.41, 4.0],
              "orientation": { "w": 0.3536, "x": -0.6124, "y": 0.6124, "z": -0.3536 } }
        ]
    }"#;

    #[test]
    fn layout_parses_and_looks_up_by_id() {
        let layout = FieldLayout::from_json_str(LAYOUT).expect("parse layout");
        assert_eq!(layout.len(), 2);
        let tag = layout.metadata(2).expect("tag 2");
        assert_eq!(tag.field_position(), Point2::new(60.25, 35.41));
        assert!(tag.name.is_empty());
        assert!(layout.metadata(7).is_none());
    }

    #[test]
    fn hash_map_is_a_catalog() {
        let layout = FieldLayout::from_json_str(LAYOUT).expect("parse layout");
        let map: HashMap<u32, MarkerMetadata> =
            layout.tags.into_iter().map(|t| (t.id, t)).collect();
        assert_eq!(map.metadata(1).map(|t| t.name.as_str()), Some("blue-left"));
    }
}
