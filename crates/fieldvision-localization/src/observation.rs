use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::catalog::MarkerMetadata;
use crate::error::PoseEstimateError;
use crate::quaternion::Quaternion;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Tag detectors usually report yaw and bearing in degrees.
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }
}

/// Marker pose as measured by the camera.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRelativePose {
    /// Rotation of the marker about the vertical axis, seen from the camera.
    pub yaw: f64,
    /// Angle from the camera's line of sight to the marker center.
    pub bearing: f64,
    /// Distance from the lens to the marker center, in field units.
    pub range: f64,
    #[serde(default)]
    pub unit: AngleUnit,
}

/// One tag detection as delivered by the tag detector.
///
/// Either part may be missing (unknown tag, failed pose solve); such a
/// detection cannot be turned into a [`MarkerObservation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerDetection {
    pub id: u32,
    #[serde(default)]
    pub metadata: Option<MarkerMetadata>,
    #[serde(default)]
    pub camera_pose: Option<CameraRelativePose>,
}

/// A complete single-marker observation, angles in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerObservation {
    pub yaw: f64,
    pub bearing: f64,
    pub range: f64,
    pub marker_position: Point2<f64>,
    pub marker_orientation: Quaternion,
}

impl MarkerObservation {
    pub fn from_parts(metadata: &MarkerMetadata, pose: &CameraRelativePose) -> Self {
        Self {
            yaw: pose.unit.to_radians(pose.yaw),
            bearing: pose.unit.to_radians(pose.bearing),
            range: pose.range,
            marker_position: metadata.field_position(),
            marker_orientation: metadata.orientation,
        }
    }

    /// Reject readings the estimator cannot turn into a meaningful pose.
    pub fn validate(&self) -> Result<(), PoseEstimateError> {
        if !(self.yaw.is_finite() && self.bearing.is_finite() && self.range.is_finite()) {
            return Err(PoseEstimateError::invalid("non-finite camera-relative pose"));
        }
        if !(self.marker_position.x.is_finite() && self.marker_position.y.is_finite()) {
            return Err(PoseEstimateError::invalid("non-finite marker field position"));
        }
        if !self.marker_orientation.is_finite() || self.marker_orientation.norm() < 1e-9 {
            return Err(PoseEstimateError::invalid("degenerate marker orientation"));
        }
        Ok(())
    }
}

impl TryFrom<&MarkerDetection> for MarkerObservation {
    type Error = PoseEstimateError;

    fn try_from(detection: &MarkerDetection) -> Result<Self, Self::Error> {
        let metadata = detection
            .metadata
            .as_ref()
            .ok_or(PoseEstimateError::invalid("detection has no marker metadata"))?;
        let pose = detection
            .camera_pose
            .as_ref()
            .ok_or(PoseEstimateError::invalid("detection has no camera-relative pose"))?;
        Ok(Self::from_parts(metadata, pose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    fn metadata() -> MarkerMetadata {
        MarkerMetadata {
            id: 2,
            name: "wall".into(),
            position: [60.25, 35.41, 4.0],
            orientation: Quaternion::new(0.3536, -0.6124, 0.6124, -0.3536),
        }
    }

    #[test]
    fn degrees_are_converted_on_the_way_in() {
        let pose = CameraRelativePose {
            yaw: -45.0,
            bearing: 45.0,
            range: 24.0,
            unit: AngleUnit::Degrees,
        };
        let obs = MarkerObservation::from_parts(&metadata(), &pose);
        assert_abs_diff_eq!(obs.yaw, -FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(obs.bearing, FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(obs.marker_position, Point2::new(60.25, 35.41));
    }

    #[test]
    fn missing_parts_are_invalid_input() {
        let detection = MarkerDetection {
            id: 2,
            metadata: Some(metadata()),
            camera_pose: None,
        };
        assert!(matches!(
            MarkerObservation::try_from(&detection),
            Err(PoseEstimateError::InvalidInput { .. })
        ));
    }

    #[test]
    fn nan_range_fails_validation() {
        let pose = CameraRelativePose {
            yaw: 0.0,
            bearing: 0.0,
            range: f64::NAN,
            unit: AngleUnit::Radians,
        };
        let obs = MarkerObservation::from_parts(&metadata(), &pose);
        assert!(obs.validate().is_err());
    }

    #[test]
    fn degenerate_orientation_fails_validation() {
        let pose = CameraRelativePose {
            yaw: 0.0,
            bearing: 0.0,
            range: 24.0,
            unit: AngleUnit::Radians,
        };
        let mut obs = MarkerObservation::from_parts(&metadata(), &pose);
        assert!(obs.validate().is_ok());

        obs.marker_orientation = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            obs.validate(),
            Err(PoseEstimateError::InvalidInput { .. })
        ));

        obs.marker_orientation = Quaternion::new(f64::INFINITY, 0.0, 0.0, 0.0);
        assert!(matches!(
            obs.validate(),
            Err(PoseEstimateError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unit_defaults_to_degrees_when_deserialized() {
        let pose: CameraRelativePose =
            serde_json::from_str(r#"{"yaw": 10, "bearing": 0, "range": 5}"#).expect("parse");
        assert_eq!(pose.unit, AngleUnit::Degrees);
    }
}
