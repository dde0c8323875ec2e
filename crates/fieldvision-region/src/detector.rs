use fieldvision_core::{Contour, FrameSize, Scale};
use log::debug;
use nalgebra::Point2;

use crate::detection::RegionDetection;
use crate::error::RegionError;
use crate::threshold::AreaThreshold;

/// Per-session region state: frame size, thresholds, the current contour and
/// the detection derived from them.
///
/// A contour is valid iff it is non-empty and `min < area < max` (both bounds
/// strict, so a zero-area contour never passes a zero minimum). Every mutation
/// rebuilds the [`RegionDetection`] value in one step.
#[derive(Clone, Debug)]
pub struct RegionDetector {
    frame: FrameSize,
    min_area: AreaThreshold,
    max_area: AreaThreshold,
    contour: Option<Contour>,
    detection: RegionDetection,
}

impl RegionDetector {
    /// Start a session once the frame size is known.
    ///
    /// Defaults: minimum 0 px², maximum the full frame area.
    pub fn new(width: u32, height: u32) -> Result<Self, RegionError> {
        let frame = FrameSize::new(width, height)?;
        Ok(Self {
            frame,
            min_area: AreaThreshold::from_px(0.0)?,
            max_area: AreaThreshold::full_frame(&frame),
            contour: None,
            detection: RegionDetection::not_detected(frame),
        })
    }

    /// Re-establish the frame size.
    ///
    /// Thresholds last set in percent are re-derived for the new frame;
    /// thresholds set in pixels keep their px² value.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<(), RegionError> {
        let frame = FrameSize::new(width, height)?;
        self.min_area = self.min_area.rescaled(&self.frame, &frame);
        self.max_area = self.max_area.rescaled(&self.frame, &frame);
        self.frame = frame;
        self.refresh();
        Ok(())
    }

    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    /// Replace the current contour and re-evaluate validity.
    pub fn update_contour(&mut self, contour: Option<Contour>) -> &RegionDetection {
        self.contour = contour;
        self.refresh();
        &self.detection
    }

    pub fn contour(&self) -> Option<&Contour> {
        self.contour.as_ref()
    }

    pub fn detection(&self) -> &RegionDetection {
        &self.detection
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.detection.is_valid()
    }

    pub fn center(&self, scale: Scale) -> Option<Point2<f64>> {
        self.detection.center(scale)
    }

    pub fn area(&self, scale: Scale) -> Option<f64> {
        self.detection.area(scale)
    }

    pub fn bottom_left_corner(&self) -> Option<Point2<f64>> {
        self.detection.bottom_left_corner()
    }

    pub fn bottom_right_corner(&self) -> Option<Point2<f64>> {
        self.detection.bottom_right_corner()
    }

    pub fn min_area_threshold(&self, scale: Scale) -> f64 {
        self.min_area.value(scale, &self.frame)
    }

    pub fn max_area_threshold(&self, scale: Scale) -> f64 {
        self.max_area.value(scale, &self.frame)
    }

    pub fn set_min_area_threshold(&mut self, value: f64, scale: Scale) -> Result<(), RegionError> {
        self.min_area = AreaThreshold::new(value, scale, &self.frame)?;
        self.refresh();
        Ok(())
    }

    pub fn set_max_area_threshold(&mut self, value: f64, scale: Scale) -> Result<(), RegionError> {
        self.max_area = AreaThreshold::new(value, scale, &self.frame)?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.detection = self.evaluate();
    }

    fn evaluate(&self) -> RegionDetection {
        let Some(contour) = self.contour.as_ref().filter(|c| !c.is_empty()) else {
            return RegionDetection::not_detected(self.frame);
        };

        let area_px = contour.area();
        if !(self.min_area.px() < area_px && area_px < self.max_area.px()) {
            debug!(
                "contour rejected: area {:.1} px² outside ({:.1}, {:.1})",
                area_px,
                self.min_area.px(),
                self.max_area.px()
            );
            return RegionDetection::not_detected(self.frame);
        }

        match (contour.centroid(), contour.bounding_rect()) {
            (Some(center_px), Some(rect)) => RegionDetection::Detected {
                frame: self.frame,
                area_px,
                center_px,
                bottom_left_px: rect.bottom_left(),
                bottom_right_px: rect.bottom_right(),
            },
            _ => RegionDetection::not_detected(self.frame),
        }
    }
}
