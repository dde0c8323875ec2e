use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Unit in which frame geometry is read or written.
///
/// - `Pixels`: raw image coordinates (origin top-left, +y down) and px² areas.
/// - `Percent`: coordinates normalized to `[-50, 50]` with the origin at the
///   frame center and +y up; areas as a percentage of the full frame area.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Pixels,
    Percent,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid frame dimensions (width={width}, height={height})")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Dimensions of the camera frame a detection session runs on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total frame area in px².
    #[inline]
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Convert an area expressed in `scale` to px².
    #[inline]
    pub fn area_to_px(&self, value: f64, scale: Scale) -> f64 {
        match scale {
            Scale::Pixels => value,
            Scale::Percent => value * self.area() / 100.0,
        }
    }

    /// Express an area in px² in `scale`.
    #[inline]
    pub fn area_from_px(&self, area_px: f64, scale: Scale) -> f64 {
        match scale {
            Scale::Pixels => area_px,
            Scale::Percent => area_px / self.area() * 100.0,
        }
    }

    /// Express an image point (px, +y down) in `scale`.
    pub fn point_from_px(&self, p: Point2<f64>, scale: Scale) -> Point2<f64> {
        match scale {
            Scale::Pixels => p,
            Scale::Percent => Point2::new(
                p.x / self.width as f64 * 100.0 - 50.0,
                -(p.y / self.height as f64 * 100.0) + 50.0,
            ),
        }
    }
}
