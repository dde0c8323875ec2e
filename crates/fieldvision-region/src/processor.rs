use fieldvision_core::{largest_contour, ColorRange};
use log::{debug, info};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::backend::VisionBackend;
use crate::detection::RegionDetection;
use crate::detector::RegionDetector;
use crate::error::RegionError;
use crate::params::ProcessorParams;
use crate::shared::SharedDetection;

/// Detects the largest blob of the configured colors in each frame.
///
/// Call [`init`](Self::init) once the frame size is known, then
/// [`process_frame`](Self::process_frame) for every frame. Each processed
/// frame is also published to the [`SharedDetection`] handle.
pub struct ColorDetectionProcessor<B: VisionBackend> {
    backend: B,
    params: ProcessorParams,
    detector: Option<RegionDetector>,
    shared: SharedDetection,
}

impl<B: VisionBackend> ColorDetectionProcessor<B> {
    pub fn new(backend: B, params: ProcessorParams) -> Self {
        Self {
            backend,
            params,
            detector: None,
            shared: SharedDetection::new(),
        }
    }

    /// Processor targeting competition red (both hue bands).
    pub fn red(backend: B) -> Self {
        Self::new(backend, ProcessorParams::for_colors(ColorRange::red()))
    }

    /// Processor targeting competition blue.
    pub fn blue(backend: B) -> Self {
        Self::new(backend, ProcessorParams::for_colors(ColorRange::blue()))
    }

    pub fn params(&self) -> &ProcessorParams {
        &self.params
    }

    pub fn set_color_ranges(&mut self, color_ranges: Vec<ColorRange>) {
        self.params.color_ranges = color_ranges;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn detector(&self) -> Option<&RegionDetector> {
        self.detector.as_ref()
    }

    /// Mutable detector access, e.g. to adjust thresholds between frames.
    pub fn detector_mut(&mut self) -> Option<&mut RegionDetector> {
        self.detector.as_mut()
    }

    pub fn shared(&self) -> SharedDetection {
        self.shared.clone()
    }

    /// Start (or restart) the session for a `width` x `height` frame.
    ///
    /// On failure an existing session is kept as it was.
    pub fn init(&mut self, width: u32, height: u32) -> Result<(), RegionError> {
        match self.detector.as_mut() {
            Some(detector) => detector.initialize(width, height)?,
            None => self.detector = Some(self.configured_detector(width, height)?),
        }
        info!(
            "color processor initialized: {}x{}, {} color range(s)",
            width,
            height,
            self.params.color_ranges.len()
        );
        if let Some(detector) = &self.detector {
            self.shared.publish(detector.detection().clone());
        }
        Ok(())
    }

    fn configured_detector(&self, width: u32, height: u32) -> Result<RegionDetector, RegionError> {
        let mut detector = RegionDetector::new(width, height)?;
        if let Some(min) = self.params.min_area {
            detector.set_min_area_threshold(min.value, min.scale)?;
        }
        if let Some(max) = self.params.max_area {
            detector.set_max_area_threshold(max.value, max.scale)?;
        }
        Ok(detector)
    }

    /// Run one frame through the pipeline and return its detection.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn process_frame(&mut self, frame: &B::Frame) -> Result<RegionDetection, RegionError> {
        let (width, height) = self.backend.frame_size(frame);
        let needs_init = match &self.detector {
            None => return Err(RegionError::NotInitialized),
            Some(d) => d.frame().width != width || d.frame().height != height,
        };
        if needs_init {
            debug!("frame size changed to {}x{}, re-initializing", width, height);
            self.init(width, height)?;
        }

        let candidates = self.backend.candidate_contours(frame, &self.params);
        let count = candidates.len();
        let selected = largest_contour(candidates);

        let detector = self.detector.as_mut().ok_or(RegionError::NotInitialized)?;
        let detection = detector.update_contour(selected).clone();
        debug!(
            "frame processed: {} candidate(s), valid={}",
            count,
            detection.is_valid()
        );

        self.shared.publish(detection.clone());
        Ok(detection)
    }
}
