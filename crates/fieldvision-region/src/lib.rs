//! Color-blob region detection.
//!
//! This crate wires together:
//! - a [`VisionBackend`] that turns a frame into candidate contours
//!   (blur, color conversion, range masking, erode/dilate, contour tracing),
//! - largest-contour selection,
//! - a [`RegionDetector`] session that validates the selected contour against
//!   min/max area thresholds and exposes its geometry in pixels or in
//!   percent-of-frame units.
//!
//! It does **not** ship image primitives itself; the `fieldvision` facade
//! crate provides an `imageproc`-based backend.

mod backend;
mod detection;
mod detector;
mod error;
mod params;
mod processor;
mod shared;
mod threshold;

pub use backend::VisionBackend;
pub use detection::RegionDetection;
pub use detector::RegionDetector;
pub use error::RegionError;
pub use params::{AreaSetting, ProcessorParams};
pub use processor::ColorDetectionProcessor;
pub use shared::SharedDetection;
pub use threshold::AreaThreshold;

pub use fieldvision_core::{ColorRange, Contour, FrameSize, Scale};
