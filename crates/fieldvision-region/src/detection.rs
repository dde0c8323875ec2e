use fieldvision_core::{FrameSize, Scale};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Immutable outcome of one frame's region detection.
///
/// Geometry is stored in pixels; scaled views are computed on demand against
/// the stored frame size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegionDetection {
    Detected {
        frame: FrameSize,
        area_px: f64,
        center_px: Point2<f64>,
        bottom_left_px: Point2<f64>,
        bottom_right_px: Point2<f64>,
    },
    NotDetected {
        frame: FrameSize,
    },
}

impl RegionDetection {
    pub fn not_detected(frame: FrameSize) -> Self {
        Self::NotDetected { frame }
    }

    pub fn frame(&self) -> FrameSize {
        match self {
            Self::Detected { frame, .. } | Self::NotDetected { frame } => *frame,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Detected { .. })
    }

    /// Region centroid. In `Percent`, `(0, 0)` is the frame center and +y is up.
    pub fn center(&self, scale: Scale) -> Option<Point2<f64>> {
        match self {
            Self::Detected {
                frame, center_px, ..
            } => Some(frame.point_from_px(*center_px, scale)),
            Self::NotDetected { .. } => None,
        }
    }

    /// Region area in px², or as a percentage of the frame area.
    pub fn area(&self, scale: Scale) -> Option<f64> {
        match self {
            Self::Detected { frame, area_px, .. } => Some(frame.area_from_px(*area_px, scale)),
            Self::NotDetected { .. } => None,
        }
    }

    /// Bottom-left corner of the region's bounding box, in px.
    pub fn bottom_left_corner(&self) -> Option<Point2<f64>> {
        match self {
            Self::Detected { bottom_left_px, .. } => Some(*bottom_left_px),
            Self::NotDetected { .. } => None,
        }
    }

    /// Bottom-right corner of the region's bounding box, in px.
    pub fn bottom_right_corner(&self) -> Option<Point2<f64>> {
        match self {
            Self::Detected {
                bottom_right_px, ..
            } => Some(*bottom_right_px),
            Self::NotDetected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_detected_has_no_geometry() {
        let det = RegionDetection::not_detected(FrameSize::new(4, 4).unwrap());
        assert!(!det.is_valid());
        assert!(det.center(Scale::Pixels).is_none());
        assert!(det.area(Scale::Percent).is_none());
        assert!(det.bottom_left_corner().is_none());
        assert!(det.bottom_right_corner().is_none());
    }

    #[test]
    fn serializes_with_status_tag() {
        let det = RegionDetection::not_detected(FrameSize::new(4, 3).unwrap());
        let json = serde_json::to_value(&det).expect("serialize");
        assert_eq!(json["status"], "not_detected");
        assert_eq!(json["frame"]["width"], 4);
    }
}
