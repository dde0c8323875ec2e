use std::f64::consts::FRAC_PI_2;

use fieldvision_core::{wrap_angle, Pose2d};
use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::catalog::MarkerCatalog;
use crate::error::PoseEstimateError;
use crate::observation::{CameraRelativePose, MarkerDetection, MarkerObservation};
use crate::transform::RigidTransform2d;

/// Fixed mounting of the camera, expressed in the robot frame.
///
/// `(x, y)` is the vector from the camera to the robot origin; `heading` is
/// the camera's yaw relative to the robot's forward axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOffset {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl CameraOffset {
    pub const ZERO: CameraOffset = CameraOffset::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    #[inline]
    fn vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Single-marker robot pose estimator.
///
/// The only configuration is the camera offset; changing it means building a
/// new estimator ([`PoseEstimator::with_offset`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseEstimator {
    offset: CameraOffset,
}

impl PoseEstimator {
    pub fn new(offset: CameraOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> CameraOffset {
        self.offset
    }

    pub fn with_offset(&self, offset: CameraOffset) -> Self {
        Self::new(offset)
    }

    /// Camera-to-field transform at the moment of observation.
    ///
    /// The rotation is the camera heading `π/2 − marker_heading + yaw`; the
    /// translation is the marker's field position.
    pub fn camera_to_field(observation: &MarkerObservation) -> RigidTransform2d {
        let marker_heading = observation.marker_orientation.yaw();
        RigidTransform2d::new(
            FRAC_PI_2 - marker_heading + observation.yaw,
            observation.marker_position.coords,
        )
    }

    /// Camera position in the field.
    pub fn camera_position(observation: &MarkerObservation) -> Point2<f64> {
        let (sin_b, cos_b) = observation.bearing.sin_cos();
        let polar = Point2::new(observation.range * cos_b, observation.range * sin_b);
        Self::camera_to_field(observation).apply(polar)
    }

    /// Rotation carrying the robot frame into the field frame:
    /// `π/2 + marker_heading + yaw − camera_heading_on_robot`.
    pub fn robot_rotation(&self, observation: &MarkerObservation) -> f64 {
        FRAC_PI_2 + observation.marker_orientation.yaw() + observation.yaw - self.offset.heading
    }

    /// Robot-to-field transform anchored at the camera position.
    pub fn robot_to_field(&self, observation: &MarkerObservation) -> RigidTransform2d {
        RigidTransform2d::new(
            self.robot_rotation(observation),
            Self::camera_position(observation).coords,
        )
    }

    /// Estimate the field-relative robot pose from one observation.
    ///
    /// The heading is the negated robot rotation, wrapped into `(-π, π]`.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn estimate(&self, observation: &MarkerObservation) -> Result<Pose2d, PoseEstimateError> {
        observation.validate()?;

        let robot_to_field = self.robot_to_field(observation);
        let position = robot_to_field.apply(Point2::from(self.offset.vector()));
        let pose = Pose2d::new(
            position.x,
            position.y,
            wrap_angle(-robot_to_field.rotation),
        );

        debug!(
            "pose estimate: x={:.3} y={:.3} heading={:.4} (range={:.2})",
            pose.x, pose.y, pose.heading, observation.range
        );
        Ok(pose)
    }

    /// Estimate from a raw tag detection, which may be absent or incomplete.
    pub fn estimate_detection(
        &self,
        detection: Option<&MarkerDetection>,
    ) -> Result<Pose2d, PoseEstimateError> {
        let detection = detection.ok_or(PoseEstimateError::invalid("no detection"))?;
        let observation = MarkerObservation::try_from(detection).inspect_err(|e| {
            warn!("tag {} rejected: {e}", detection.id);
        })?;
        self.estimate(&observation)
    }

    /// Estimate using a catalog lookup for the marker placement.
    pub fn estimate_with_catalog<C>(
        &self,
        catalog: &C,
        id: u32,
        camera_pose: &CameraRelativePose,
    ) -> Result<Pose2d, PoseEstimateError>
    where
        C: MarkerCatalog + ?Sized,
    {
        let metadata = catalog
            .metadata(id)
            .ok_or(PoseEstimateError::invalid("marker id not in catalog"))?;
        self.estimate(&MarkerObservation::from_parts(metadata, camera_pose))
    }
}

/// Free-function form of [`PoseEstimator::estimate`].
pub fn estimate(
    observation: &MarkerObservation,
    camera_offset: CameraOffset,
) -> Result<Pose2d, PoseEstimateError> {
    PoseEstimator::new(camera_offset).estimate(observation)
}
