//! High-level facade crate for the `fieldvision-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) an `imageproc`-based vision backend and end-to-end helpers
//!   that run the color pipeline on an `image::RgbImage`.
//!
//! ## Quickstart
//!
//! ```no_run
//! use fieldvision::localization::{CameraOffset, MarkerObservation, PoseEstimator, Quaternion};
//! use nalgebra::Point2;
//!
//! let estimator = PoseEstimator::new(CameraOffset::new(-7.77, 0.505, 0.0));
//! let observation = MarkerObservation {
//!     yaw: 0.0,
//!     bearing: 0.0,
//!     range: 24.0,
//!     marker_position: Point2::new(60.25, 35.41),
//!     marker_orientation: Quaternion::new(0.3536, -0.6124, 0.6124, -0.3536),
//! };
//! let pose = estimator.estimate(&observation).expect("valid observation");
//! println!("robot at ({:.1}, {:.1})", pose.x, pose.y);
//! ```
//!
//! ## API map
//! - `fieldvision::core`: shared value types (poses, frames, contours, colors).
//! - `fieldvision::localization`: single-marker robot pose estimation.
//! - `fieldvision::region`: color-blob region detection sessions.
//! - `fieldvision::detect` (feature `image`): `imageproc` backend and helpers.

pub use fieldvision_core as core;
pub use fieldvision_localization as localization;
pub use fieldvision_region as region;

pub use fieldvision_core::{init_with_level, ColorRange, Contour, FrameSize, Pose2d, Scale};
pub use fieldvision_localization::{CameraOffset, PoseEstimator};
pub use fieldvision_region::{ColorDetectionProcessor, RegionDetection, RegionDetector};

mod error;

pub use error::Error;

#[cfg(feature = "image")]
pub mod detect;
