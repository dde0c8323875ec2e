use fieldvision_core::{FrameSize, Scale};
use serde::{Deserialize, Serialize};

use crate::error::RegionError;

/// An area bound stored canonically in px².
///
/// `set_in` remembers which unit the caller spoke so a percent threshold keeps
/// its meaning when the frame size changes; the value itself exists only in
/// px².
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaThreshold {
    px: f64,
    set_in: Scale,
}

impl AreaThreshold {
    pub fn from_px(px: f64) -> Result<Self, RegionError> {
        Self::validate(px)?;
        Ok(Self {
            px,
            set_in: Scale::Pixels,
        })
    }

    pub fn new(value: f64, scale: Scale, frame: &FrameSize) -> Result<Self, RegionError> {
        Self::validate(value)?;
        Ok(Self {
            px: frame.area_to_px(value, scale),
            set_in: scale,
        })
    }

    /// Threshold covering the whole frame (100 %).
    pub fn full_frame(frame: &FrameSize) -> Self {
        Self {
            px: frame.area(),
            set_in: Scale::Percent,
        }
    }

    #[inline]
    pub fn px(&self) -> f64 {
        self.px
    }

    #[inline]
    pub fn set_in(&self) -> Scale {
        self.set_in
    }

    #[inline]
    pub fn value(&self, scale: Scale, frame: &FrameSize) -> f64 {
        frame.area_from_px(self.px, scale)
    }

    /// Carry the threshold to a new frame size.
    ///
    /// Percent thresholds keep their percentage; pixel thresholds keep px².
    pub fn rescaled(self, from: &FrameSize, to: &FrameSize) -> Self {
        match self.set_in {
            Scale::Pixels => self,
            Scale::Percent => Self {
                px: to.area_to_px(from.area_from_px(self.px, Scale::Percent), Scale::Percent),
                set_in: Scale::Percent,
            },
        }
    }

    fn validate(value: f64) -> Result<(), RegionError> {
        if !value.is_finite() || value < 0.0 {
            return Err(RegionError::InvalidThreshold { value });
        }
        Ok(())
    }
}
