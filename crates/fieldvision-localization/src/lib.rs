//! Field-relative robot localization from a single fiducial marker.
//!
//! Pipeline per observation:
//! 1. Extract the marker's field heading from its orientation quaternion.
//! 2. Place the camera in the field: rotate the observed polar reading
//!    (bearing, range) into the field and translate by the marker position.
//! 3. Place the robot: carry the fixed camera-to-robot offset into the field
//!    with the robot rotation and translate by the camera position.
//!
//! Steps 2 and 3 are explicit [`RigidTransform2d`] values so each rotation can
//! be checked on its own. No state is kept between observations.

mod catalog;
mod error;
mod estimator;
mod observation;
mod quaternion;
mod transform;

pub use catalog::{FieldLayout, MarkerCatalog, MarkerMetadata};
pub use error::PoseEstimateError;
pub use estimator::{estimate, CameraOffset, PoseEstimator};
pub use observation::{AngleUnit, CameraRelativePose, MarkerDetection, MarkerObservation};
pub use quaternion::Quaternion;
pub use transform::RigidTransform2d;

pub use fieldvision_core::Pose2d;
